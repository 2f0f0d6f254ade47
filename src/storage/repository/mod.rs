pub mod client_repo;
pub mod evaluation_repo;
pub mod hotel_repo;
pub mod reservation_repo;
pub mod room_repo;
pub mod stats_repo;

pub use client_repo::{ClientRepository, NewClient};
pub use evaluation_repo::{EvaluationRepository, EvaluationRow, NewEvaluation};
pub use hotel_repo::{HotelPrestationRow, HotelRepository};
pub use reservation_repo::{NewReservation, ReservationRepository, ReservationRow, StayPeriod};
pub use room_repo::RoomRepository;
pub use stats_repo::{DashboardCounts, StatsRepository};
