use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("folio_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// a missing key is the normal state for a first visit, so only real failures get logged
pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("folio_{}", key);

    LocalStorage::get(key.clone()).map_err(|err| match err {
        StorageError::KeyNotFound(_) => anyhow::Error::msg(format!("{key} not set")),
        err => {
            console_error!(format!("Failed to fetch local storage {key}: {err}"));
            anyhow::Error::msg("Local storage failure, see console log")
        }
    })
}
