use sea_orm::entity::prelude::*;

/// Hotel reservation owned by a single user.
///
/// `pnr` is the public identifier handed to clients and is unique across the
/// table. `accommodation` stores the lowercase accommodation name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub pnr: String,
    pub destination: String,
    pub accommodation: String,
    pub check_in_date: Date,
    pub check_out_date: Date,
    pub guest_count: i32,
    pub created_at: DateTimeUtc,
    pub is_active: bool,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
