pub mod application {
    pub mod product {
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_categories;
    }
    pub mod recommendation {
        pub mod resolve;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_categories;
        }
    }
    pub mod recommendation {
        pub mod directive;
        pub mod errors;
        pub mod keyword;
        pub mod model;
        pub mod response;
        pub mod services;
        pub mod use_cases {
            pub mod resolve;
        }
    }
}
