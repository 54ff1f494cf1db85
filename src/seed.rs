use crate::{
    error::StoreResult,
    models::{NewClub, NewStudent},
    store::ClubStore,
};

/// Demo clubs and the students signed up for each.
const SEED: [(&str, [&str; 2]); 2] = [
    ("Robotics Club", ["Bart Simpson", "Steven Universe"]),
    ("A Cappella Group", ["Kipo Oak", "Tina Belcher"]),
];

pub async fn seed(store: &dyn ClubStore) -> StoreResult<()> {
    tracing::info!("seeding...");

    let mut clubs = Vec::with_capacity(SEED.len());
    for (club_name, students) in SEED {
        let club = store.insert_club(NewClub::new(club_name)?).await?;
        clubs.push((club, students));
    }

    for (club, students) in clubs {
        for name in students {
            let (student, _) = store
                .enroll_new_student(&club, NewStudent::new(name)?)
                .await?;
            tracing::debug!(club = %club.name, student = %student.name, "signed up");
        }
    }

    tracing::info!("done!");
    Ok(())
}
