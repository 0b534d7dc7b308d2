//! SeaORM entities for the inventory schema.

pub mod inventory {
    use sea_orm::entity::prelude::*;

    /// One regional inventory row, keyed by (region, address).
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "ipaddress_inside_regional")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub region: String,

        /// Numeric form of the IPv4 address.
        #[sea_orm(primary_key, auto_increment = false)]
        pub address: u32,

        pub timestamp: DateTimeUtc,

        pub inuse: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod region {
    use sea_orm::entity::prelude::*;

    /// Reference table of known regions.
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "region")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub region_name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
