use super::ClubStore;
use crate::{
    error::{StoreError, StoreResult},
    models::{Club, NewClub, NewSignup, NewStudent, Signup, Student},
};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    clubs: Vec<Club>,
    students: Vec<Student>,
    signups: Vec<Signup>,
}

/// In-process [`ClubStore`]. Ids are assigned from 1 per table, like a
/// `SERIAL` column.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(last: Option<i32>) -> i32 {
    last.map_or(1, |id| id + 1)
}

#[async_trait]
impl ClubStore for MemoryStore {
    async fn find_all_clubs(&self) -> StoreResult<Vec<Club>> {
        Ok(self.tables.read().await.clubs.clone())
    }

    async fn find_club_by_id(&self, id: i32) -> StoreResult<Option<Club>> {
        let tables = self.tables.read().await;
        Ok(tables.clubs.iter().find(|c| c.id == id).cloned())
    }

    async fn find_student_by_id(&self, id: i32) -> StoreResult<Option<Student>> {
        let tables = self.tables.read().await;
        Ok(tables.students.iter().find(|s| s.id == id).cloned())
    }

    async fn list_students_for_club(&self, club_id: i32) -> StoreResult<Vec<Student>> {
        let tables = self.tables.read().await;
        Ok(tables
            .signups
            .iter()
            .filter(|signup| signup.club_id == club_id)
            .filter_map(|signup| tables.students.iter().find(|s| s.id == signup.student_id))
            .cloned()
            .collect())
    }

    async fn list_clubs_for_student(&self, student_id: i32) -> StoreResult<Vec<Club>> {
        let tables = self.tables.read().await;
        Ok(tables
            .signups
            .iter()
            .filter(|signup| signup.student_id == student_id)
            .filter_map(|signup| tables.clubs.iter().find(|c| c.id == signup.club_id))
            .cloned()
            .collect())
    }

    async fn list_signups_for_club(&self, club_id: i32) -> StoreResult<Vec<Signup>> {
        let tables = self.tables.read().await;
        Ok(tables
            .signups
            .iter()
            .filter(|signup| signup.club_id == club_id)
            .cloned()
            .collect())
    }

    async fn list_signups_for_student(&self, student_id: i32) -> StoreResult<Vec<Signup>> {
        let tables = self.tables.read().await;
        Ok(tables
            .signups
            .iter()
            .filter(|signup| signup.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn insert_club(&self, club: NewClub) -> StoreResult<Club> {
        let mut tables = self.tables.write().await;
        let club = Club {
            id: next_id(tables.clubs.last().map(|c| c.id)),
            name: club.name().to_string(),
        };
        tables.clubs.push(club.clone());
        Ok(club)
    }

    async fn insert_student(&self, student: NewStudent) -> StoreResult<Student> {
        let mut tables = self.tables.write().await;
        let student = Student {
            id: next_id(tables.students.last().map(|s| s.id)),
            name: student.name().to_string(),
        };
        tables.students.push(student.clone());
        Ok(student)
    }

    async fn insert_signup(&self, signup: NewSignup) -> StoreResult<Signup> {
        let mut tables = self.tables.write().await;
        if !tables.clubs.iter().any(|c| c.id == signup.club_id) {
            return Err(StoreError::Storage(anyhow::anyhow!(
                "signup references missing club {}",
                signup.club_id
            )));
        }
        if !tables.students.iter().any(|s| s.id == signup.student_id) {
            return Err(StoreError::Storage(anyhow::anyhow!(
                "signup references missing student {}",
                signup.student_id
            )));
        }

        let signup = Signup {
            id: next_id(tables.signups.last().map(|s| s.id)),
            club_id: signup.club_id,
            student_id: signup.student_id,
        };
        tables.signups.push(signup.clone());
        Ok(signup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn club(store: &MemoryStore, name: &str) -> Club {
        store
            .insert_club(NewClub::new(name).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn ids_are_assigned_in_insertion_order() {
        let store = MemoryStore::new();

        let robotics = club(&store, "Robotics Club").await;
        let choir = club(&store, "A Cappella Group").await;

        assert_eq!((robotics.id, choir.id), (1, 2));
        assert_eq!(store.find_all_clubs().await.unwrap(), vec![robotics, choir]);
        assert_eq!(store.find_club_by_id(3).await.unwrap(), None);
        assert_eq!(store.find_club_by_id(0).await.unwrap(), None);
    }

    #[tokio::test]
    async fn relations_are_walked_both_ways() {
        let store = MemoryStore::new();
        let robotics = club(&store, "Robotics Club").await;
        let choir = club(&store, "A Cappella Group").await;

        let (bart, first) = store
            .enroll_new_student(&robotics, NewStudent::new("Bart Simpson").unwrap())
            .await
            .unwrap();
        let second = store
            .insert_signup(NewSignup {
                club_id: choir.id,
                student_id: bart.id,
            })
            .await
            .unwrap();

        assert_eq!(
            store.list_clubs_for_student(bart.id).await.unwrap(),
            vec![robotics.clone(), choir.clone()]
        );
        assert_eq!(
            store.list_signups_for_student(bart.id).await.unwrap(),
            vec![first.clone(), second.clone()]
        );
        assert_eq!(
            store.list_signups_for_club(choir.id).await.unwrap(),
            vec![second]
        );
        assert_eq!(store.club_of_signup(&first).await.unwrap(), robotics);
        assert_eq!(store.student_of_signup(&first).await.unwrap(), bart);
        assert_eq!(store.find_students_of_club(&choir).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_signups_are_accepted() {
        let store = MemoryStore::new();
        let robotics = club(&store, "Robotics Club").await;
        let (steven, _) = store
            .enroll_new_student(&robotics, NewStudent::new("Steven Universe").unwrap())
            .await
            .unwrap();

        store
            .insert_signup(NewSignup {
                club_id: robotics.id,
                student_id: steven.id,
            })
            .await
            .unwrap();

        assert_eq!(
            store.find_students_of_club(&robotics).await.unwrap(),
            vec![steven.clone(), steven]
        );
    }

    #[tokio::test]
    async fn signups_must_reference_existing_rows() {
        let store = MemoryStore::new();
        let robotics = club(&store, "Robotics Club").await;

        let err = store
            .insert_signup(NewSignup {
                club_id: robotics.id,
                student_id: 7,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));

        let err = store
            .insert_signup(NewSignup {
                club_id: 9,
                student_id: 1,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));
        assert!(store
            .list_signups_for_club(robotics.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn dangling_signups_are_storage_errors() {
        let store = MemoryStore::new();
        let signup = Signup {
            id: 1,
            club_id: 99,
            student_id: 99,
        };

        let err = store.club_of_signup(&signup).await.unwrap_err();
        assert!(matches!(&err, StoreError::Storage(_)));
        assert!(err.to_string().contains("references missing club 99"));

        let err = store.student_of_signup(&signup).await.unwrap_err();
        assert!(matches!(&err, StoreError::Storage(_)));
        assert!(err.to_string().contains("references missing student 99"));
    }

    #[tokio::test]
    async fn students_are_found_by_id() {
        let store = MemoryStore::new();
        let bart = store
            .insert_student(NewStudent::new("Bart Simpson").unwrap())
            .await
            .unwrap();

        assert_eq!(store.find_student_by_id(bart.id).await.unwrap(), Some(bart));
        assert_eq!(store.find_student_by_id(2).await.unwrap(), None);
    }
}
