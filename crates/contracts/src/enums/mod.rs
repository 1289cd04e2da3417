pub mod category_code;
pub mod delivery_zone;
pub mod payment_type;
pub mod tire_kind;

pub use category_code::CategoryCode;
pub use delivery_zone::DeliveryZone;
pub use payment_type::PaymentType;
pub use tire_kind::TireKind;
