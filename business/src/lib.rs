pub mod application {
    pub mod auth {
        pub mod reset_password;
        pub mod sign_in;
        pub mod sign_up;
    }
    pub mod cart {
        pub mod store;
    }
    pub mod catalog {
        pub mod list;
    }
    pub mod order {
        pub mod submit;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod errors;
        pub mod gateway;
        pub mod use_cases {
            pub mod reset_password;
            pub mod sign_in;
            pub mod sign_up;
        }
    }
    pub mod cart {
        pub mod model;
        pub mod storage;
    }
    pub mod order {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod submit;
        }
    }
    pub mod product {
        pub mod catalog;
        pub mod model;
        pub mod use_cases {
            pub mod list;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
