use crate::db::OrmConn;

#[derive(Clone)]
pub struct AppState {
    pub orm: OrmConn,
    pub current_user_id: i32,
}

impl AppState {
    pub fn new(orm: OrmConn, current_user_id: i32) -> Self {
        Self {
            orm,
            current_user_id,
        }
    }
}
