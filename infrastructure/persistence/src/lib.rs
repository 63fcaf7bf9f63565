pub mod db;
pub mod json_list;
pub mod key_value {
    pub mod memory;
    pub mod postgres;
}
pub mod check_in {
    pub mod entity;
    pub mod repository;
}
pub mod dish_waste {
    pub mod entity;
    pub mod repository;
}
pub mod menu {
    pub mod entity;
    pub mod repository;
}
pub mod waste {
    pub mod entity;
    pub mod repository;
}
