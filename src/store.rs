use crate::Error;
use crate::user;

use std::path::Path;
use tokio::fs;
use tokio::task;

pub async fn load(path: &Path) -> Result<user::List, anywho::Error> {
    let format = Format::detect(path)?;

    if !fs::try_exists(path).await? {
        log::warn!("{} does not exist yet, starting with no users", path.display());

        return Ok(user::List::default());
    }

    let contents = fs::read_to_string(path).await?;
    let users = task::spawn_blocking(move || format.parse(&contents)).await??;

    log::info!("Loaded {} users from {}", users.count(), path.display());

    Ok(users)
}

pub async fn save(path: &Path, users: &user::List) -> Result<(), anywho::Error> {
    let contents = Format::detect(path)?.render(users)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    fs::write(path, contents).await?;

    log::info!("Saved {} users to {}", users.count(), path.display());

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Ron,
    Json,
}

impl Format {
    fn detect(path: &Path) -> Result<Self, Error> {
        match path.extension().and_then(|extension| extension.to_str()) {
            None | Some("ron") => Ok(Self::Ron),
            Some("json") => Ok(Self::Json),
            Some(extension) => Err(Error::UnsupportedFormat(extension.to_owned())),
        }
    }

    fn parse(self, contents: &str) -> Result<user::List, anywho::Error> {
        Ok(match self {
            Self::Ron => ron::de::from_str(contents)?,
            Self::Json => serde_json::from_str(contents)?,
        })
    }

    fn render(self, users: &user::List) -> Result<String, anywho::Error> {
        Ok(match self {
            Self::Ron => ron::ser::to_string_pretty(users, ron::ser::PrettyConfig::default())?,
            Self::Json => serde_json::to_string_pretty(users)?,
        })
    }
}
