pub mod application {
    pub mod cart {
        pub mod add_product;
        pub mod context;
        pub mod remove_product;
        pub mod store;
        pub mod update_product_amount;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod notifier;
    pub mod shared {
        pub mod format;
        pub mod value_objects;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod notice;
        pub mod outcome;
        pub mod repository;
        pub mod use_cases {
            pub mod add_product;
            pub mod remove_product;
            pub mod update_product_amount;
        }
    }
}
