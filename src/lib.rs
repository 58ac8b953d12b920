pub mod blocks;
pub mod btp_server;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::{
            collections::{BTreeSet, HashSet, HashMap},
            ops::{Add, Sub}
        };
    }
}

pub mod prelude {
    pub use super::blocks::prelude::*;
    pub use super::btp_server::*;
    pub use super::utils::prelude::*;
}
