use crate::Error;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use trove::{Collection, UniqueCollection};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub name: String,
    pub age: u32,
}

impl User {
    pub fn celebrate_birthday(&mut self) -> Result<(), Error> {
        self.age = self
            .age
            .checked_add(1)
            .ok_or_else(|| Error::AgeOverflow(self.id.clone()))?;

        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.id, self.name, self.age)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(pub(crate) String);

impl Id {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Users in the order they were stored, duplicates included.
pub type List = Collection<User>;

/// Users addressable by their [`Id`].
#[derive(Debug, Clone)]
pub struct Directory {
    users: UniqueCollection<Id, User>,
}

impl Directory {
    pub fn new(users: List) -> Result<Self, trove::Error> {
        Ok(Self {
            users: UniqueCollection::from_collection(users, |user: &User| user.id.clone())?,
        })
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.item(id)
    }

    /// Finds the first user whose name contains `query`, ignoring case.
    pub fn find(&self, query: &str) -> Option<&User> {
        let query = query.to_lowercase();

        self.users
            .search(|user| user.name.to_lowercase().contains(&query))
    }

    pub fn older_than(&self, age: u32) -> Result<Self, trove::Error> {
        Ok(Self {
            users: self.users.filter(|user| user.age > age)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.count()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn into_list(self) -> List {
        self.users.into_collection()
    }
}
