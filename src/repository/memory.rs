//! In-memory adapters: a process-local store used by the test suite and for
//! database-free local runs. Behavior mirrors the PostgreSQL adapters, except
//! that the person unique-name constraint lives only in the real store.

use crate::error::AppError;
use crate::model::{Fruit, Person};
use crate::repository::{FruitRepository, PersonRepository};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

struct Table<T> {
    rows: Vec<T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn assign_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[derive(Default)]
pub struct MemoryFruitRepository {
    inner: Mutex<Table<Fruit>>,
}

#[async_trait]
impl FruitRepository for MemoryFruitRepository {
    async fn find_all(&self) -> Result<Vec<Fruit>, AppError> {
        let table = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let mut fruits = table.rows.clone();
        fruits.sort_by_key(|f| f.id);
        Ok(fruits)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Fruit>, AppError> {
        let table = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(table.rows.iter().find(|f| f.id == Some(id)).cloned())
    }

    async fn find_by_color(&self, color: &str) -> Result<Vec<Fruit>, AppError> {
        let table = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let mut fruits: Vec<Fruit> = table
            .rows
            .iter()
            .filter(|f| f.color == color)
            .cloned()
            .collect();
        fruits.sort_by_key(|f| f.id);
        Ok(fruits)
    }

    async fn save(&self, mut fruit: Fruit) -> Result<Fruit, AppError> {
        let mut table = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match fruit.id {
            Some(id) => {
                let row = table
                    .rows
                    .iter_mut()
                    .find(|f| f.id == Some(id))
                    .ok_or_else(|| {
                        AppError::NotFound(format!("fruit with id {id} does not exist"))
                    })?;
                *row = fruit.clone();
            }
            None => {
                fruit.id = Some(table.assign_id());
                table.rows.push(fruit.clone());
            }
        }
        Ok(fruit)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut table = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let before = table.rows.len();
        table.rows.retain(|f| f.id != Some(id));
        Ok(table.rows.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryPersonRepository {
    inner: Mutex<Table<Person>>,
}

#[async_trait]
impl PersonRepository for MemoryPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, AppError> {
        let table = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let mut people = table.rows.clone();
        people.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(people)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Person>, AppError> {
        let table = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(table.rows.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn save(&self, mut person: Person) -> Result<Person, AppError> {
        let mut table = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match person.id {
            Some(id) => {
                let row = table
                    .rows
                    .iter_mut()
                    .find(|p| p.id == Some(id))
                    .ok_or_else(|| {
                        AppError::NotFound(format!("person with id {id} does not exist"))
                    })?;
                *row = person.clone();
            }
            None => {
                person.id = Some(table.assign_id());
                table.rows.push(person.clone());
            }
        }
        Ok(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_assigns_distinct_ids() {
        let repo = MemoryFruitRepository::default();
        let a = repo.save(Fruit::new("Apple", "Red")).await.unwrap();
        let b = repo.save(Fruit::new("Banana", "Yellow")).await.unwrap();
        assert!(a.id.is_some());
        assert!(b.id.is_some());
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn save_with_unknown_id_is_not_found() {
        let repo = MemoryFruitRepository::default();
        let phantom = Fruit {
            id: Some(99),
            name: "Durian".into(),
            color: "Green".into(),
        };
        let err = repo.save(phantom).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_existed() {
        let repo = MemoryFruitRepository::default();
        let apple = repo.save(Fruit::new("Apple", "Red")).await.unwrap();
        assert!(repo.delete_by_id(apple.id.unwrap()).await.unwrap());
        assert!(!repo.delete_by_id(apple.id.unwrap()).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_color_matches_exactly() {
        let repo = MemoryFruitRepository::default();
        repo.save(Fruit::new("Apple", "Red")).await.unwrap();
        repo.save(Fruit::new("Cherry", "Red")).await.unwrap();
        repo.save(Fruit::new("Banana", "Yellow")).await.unwrap();

        let red = repo.find_by_color("Red").await.unwrap();
        assert_eq!(red.len(), 2);
        assert!(red.iter().all(|f| f.color == "Red"));
        // case-sensitive: no fold to "red"
        assert!(repo.find_by_color("red").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn people_list_sorted_by_name() {
        let repo = MemoryPersonRepository::default();
        for name in ["Claire", "Ada", "Bob"] {
            repo.save(Person {
                id: None,
                name: name.into(),
            })
            .await
            .unwrap();
        }
        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Ada", "Bob", "Claire"]);
    }
}
