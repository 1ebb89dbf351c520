// Pet store fixture - a model with one field of a nested model type
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Pet {
    pub name: String,
    pub age: i32,
    pub owner: Owner,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Owner {
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

#[allow(non_snake_case)]
#[derive(Debug, Serialize, Deserialize)]
pub struct Account {
    pub UserID: i64,
}

impl Pet {
    pub fn is_adult(&self) -> bool {
        self.age >= 2
    }
}
