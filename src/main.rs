mod config;
mod error;
mod store;
mod user;

use crate::config::{Command, Config};
use crate::error::Error;
use crate::user::Directory;

use std::path::Path;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anywho::Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    log::debug!("{config:?}");

    let users = store::load(&config.file).await?;

    match config.command {
        Command::List => {
            let directory = Directory::new(users)?;

            if directory.is_empty() {
                log::warn!("The roster is empty");
            }

            for user in directory.iter() {
                println!("{user}");
            }
        }
        Command::Show(id) => {
            let directory = Directory::new(users)?;
            let user = directory.get(&id).ok_or(Error::UserNotFound(id))?;

            println!("{user}");
        }
        Command::Search(query) => {
            let directory = Directory::new(users)?;
            let user = directory
                .find(&query)
                .ok_or(Error::UserNotFound(query))?;

            println!("{user}");
        }
        Command::OlderThan(age) => {
            let directory = Directory::new(users)?;
            let older = directory.older_than(age)?;

            for user in older.iter() {
                println!("{user}");
            }

            log::info!(
                "{} of {} users are older than {age}",
                older.len(),
                directory.len()
            );
        }
        Command::Birthday(id) => {
            birthday(&config.file, Directory::new(users)?, id.as_deref()).await?;
        }
        Command::Check => {
            check(&users)?;
        }
    }

    Ok(())
}

async fn birthday(
    file: &Path,
    directory: Directory,
    id: Option<&str>,
) -> Result<(), anywho::Error> {
    let users = celebrate(directory, id)?;

    store::save(file, &users).await
}

/// Ages one user, or everyone when `id` is `None`.
fn celebrate(directory: Directory, id: Option<&str>) -> Result<user::List, Error> {
    if let Some(missing) = id.filter(|id| directory.get(id).is_none()) {
        return Err(Error::UserNotFound(missing.to_owned()));
    }

    let mut users = directory.into_list();

    users.each_mut(|user| {
        if id.is_none_or(|id| user.id.as_str() == id) {
            user.celebrate_birthday()?;
            println!("Happy birthday, {}! ({})", user.name, user.age);
        }

        Ok::<_, Error>(())
    })?;

    // Revalidate ids before writing.
    Ok(Directory::new(users)?.into_list())
}

fn check(users: &user::List) -> Result<(), Error> {
    let accessor = trove::index_unique(
        users.items(),
        |user| user.id.clone(),
        |user| Error::DuplicatedUser(user.id.clone()),
    )?;

    if accessor.is_empty() {
        log::warn!("The roster is empty");
    }

    println!("{} users, all ids are unique", accessor.len());

    Ok(())
}
