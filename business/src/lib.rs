pub mod application {
    pub mod appointment {
        pub mod get_all;
    }
    pub mod auth {
        pub mod register;
        pub mod send_code;
        pub mod session_store;
        pub mod sign_in;
        pub mod verify_code;
    }
    pub mod barber {
        pub mod get_all;
    }
    pub mod promotion {
        pub mod get_all;
    }
    pub mod review {
        pub mod get_all;
    }
    pub mod service {
        pub mod get_all;
    }
    pub mod suggestion {
        pub mod suggest;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod appointment {
        pub mod catalog;
        pub mod model;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod register;
            pub mod send_code;
            pub mod sign_in;
            pub mod verify_code;
        }
    }
    pub mod barber {
        pub mod catalog;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod promotion {
        pub mod catalog;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod review {
        pub mod catalog;
        pub mod model;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod service {
        pub mod catalog;
        pub mod model;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod shared {
        pub mod fallback;
        pub mod request_tracker;
        pub mod value_objects;
    }
    pub mod suggestion {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod suggest;
        }
    }
}
