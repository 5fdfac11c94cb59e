mod components;

mod home;
pub use home::Home;

mod dashboard;
pub use dashboard::Dashboard;

mod orders;
pub use orders::Orders;

mod horoscopes;
pub use horoscopes::Horoscopes;

mod kundli;
pub use kundli::Kundli;

mod accounts;
pub use accounts::Accounts;

mod content;
pub use content::Content;

mod payments;
pub use payments::Payments;

mod settings;
pub use settings::Settings;
