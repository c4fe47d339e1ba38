use super::*;

/// Tests that every filter narrows the listing.
///
/// Expected: only users matching all set filters, in ID order
#[tokio::test]
async fn applies_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let admin = factory::user::create_admin(db).await?;
    let with_pet = repo
        .create(CreateUserParam {
            has_pet: true,
            blood_group: Some(BloodGroup::APositive),
            ..create_param("9000000020", None)
        })
        .await?;
    repo.create(CreateUserParam {
        blood_group: Some(BloodGroup::APositive),
        ..create_param("9000000021", None)
    })
    .await?;

    let all = repo.find_all(&UserFilter::default()).await?;
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, admin.id);

    let admins = repo
        .find_all(&UserFilter {
            role: Some(Role::Admin),
            ..Default::default()
        })
        .await?;
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].id, admin.id);

    let pet_owners = repo
        .find_all(&UserFilter {
            has_pet: Some(true),
            blood_group: Some(BloodGroup::APositive),
            ..Default::default()
        })
        .await?;
    assert_eq!(pet_owners.len(), 1);
    assert_eq!(pet_owners[0].id, with_pet.id);

    let a_positive = repo
        .find_all(&UserFilter {
            blood_group: Some(BloodGroup::APositive),
            ..Default::default()
        })
        .await?;
    assert_eq!(a_positive.len(), 2);

    Ok(())
}
