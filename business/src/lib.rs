pub mod application {
    pub mod check_in {
        pub mod create;
        pub mod get_all;
        pub mod get_summary;
        pub mod update_preferences;
        pub mod update_today;
    }
    pub mod dish_waste {
        pub mod create;
        pub mod get_all;
    }
    pub mod menu {
        pub mod get_today;
        pub mod set_today;
    }
    pub mod suggestion {
        pub mod generate;
        pub mod suggest;
    }
    pub mod waste {
        pub mod create;
        pub mod get_all;
        pub mod get_summary;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod storage;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod standard;
    }
    pub mod check_in {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod get_summary;
            pub mod update_preferences;
            pub mod update_today;
        }
    }
    pub mod dish_waste {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
        }
    }
    pub mod menu {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_today;
            pub mod set_today;
        }
    }
    pub mod suggestion {
        pub mod errors;
        pub mod model;
        pub mod prompt;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
            pub mod suggest;
        }
    }
    pub mod waste {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
            pub mod get_summary;
        }
    }
}
