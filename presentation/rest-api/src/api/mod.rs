pub mod error;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod catalog {
    pub mod dto;
    pub mod routes;
}
pub mod check_in {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod dish_waste {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod menu {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod suggestion {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod waste {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
