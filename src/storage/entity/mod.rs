pub mod chambre;
pub mod client;
pub mod evaluation;
pub mod hotel;
pub mod hotel_prestation;
pub mod prestation;
pub mod reservation;
pub mod type_chambre;

pub use chambre::Entity as Chambre;
pub use client::Entity as Client;
pub use evaluation::Entity as Evaluation;
pub use hotel::Entity as Hotel;
pub use hotel_prestation::Entity as HotelPrestation;
pub use prestation::Entity as Prestation;
pub use reservation::Entity as Reservation;
pub use type_chambre::Entity as TypeChambre;
