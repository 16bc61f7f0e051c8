// Use cases layer: application workflows over the upstream port.

pub mod lookup;


pub use lookup::LookupService;
