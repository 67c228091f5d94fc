pub mod dtos;
pub mod filters;
pub mod geo_point;
pub mod restaurant_info;
pub mod service_type;
