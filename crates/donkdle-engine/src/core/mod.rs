//! Static game data: locations and the catalog they are loaded into.
//!
//! - [`Location`] - A single guessable location with its scored attributes
//! - [`KongSet`] / [`MoveSet`] - The multi-valued attributes of a location
//! - [`Catalog`] - The ordered, validated collection of playable locations
//! - [`SearchHit`] - A ranked name match used for guess suggestions

pub use self::{catalog::*, location::*, region::*, search::*};

mod catalog;
mod location;
mod region;
mod search;
