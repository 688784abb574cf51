use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::UnitModel;

pub struct UnitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UnitRepository<'a, C> {
    /// Creates a new instance of [`UnitRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the oldest unit named `name`, unit names are not unique
    pub async fn find_by_name(&self, name: &str) -> Result<Option<UnitModel>, DbErr> {
        entity::prelude::Unit::find()
            .filter(entity::unit::Column::Name.eq(name))
            .order_by_asc(entity::unit::Column::Id)
            .one(self.db)
            .await
    }

    /// Returns the unit named `name`, creating it first if it does not exist
    pub async fn get_or_create(&self, name: &str) -> Result<UnitModel, DbErr> {
        if let Some(unit) = self.find_by_name(name).await? {
            return Ok(unit);
        }

        let unit = entity::unit::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        unit.insert(self.db).await
    }

    pub async fn get_many_by_ids(&self, ids: Vec<i32>) -> Result<Vec<UnitModel>, DbErr> {
        entity::prelude::Unit::find()
            .filter(entity::unit::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }
}
