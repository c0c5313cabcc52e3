//! Wrapper bodies for list and scalar results.

use serde::{Deserialize, Serialize};

/// `{ "items": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

impl<T> ItemsResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Converts each element with its `From` impl.
    pub fn convert<U, I>(items: I) -> Self
    where
        I: IntoIterator<Item = U>,
        T: From<U>,
    {
        Self::new(items.into_iter().map(T::from).collect())
    }
}

/// `{ "data": ... }`, used for booleans and the featured speaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
