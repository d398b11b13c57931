pub mod country;
pub mod destination;

pub use country::CountryEntry;
pub use destination::{Destination, DestinationDraft, DestinationView};
