mod login;
pub use login::Login;

mod guarded_layout;
pub use guarded_layout::Guarded;

mod dashboard;
pub use dashboard::Dashboard;

mod patients;
pub use patients::Patients;

mod appointment;
pub use appointment::Appointment;
