use roster_macros::entity_id;

#[entity_id]
#[derive(Copy)]
pub struct StudentId(i32);

#[entity_id]
#[derive(Copy)]
pub struct TeamId(i32);

#[entity_id]
#[derive(Copy)]
pub struct CompanyId(i32);

#[entity_id]
#[derive(Copy)]
pub struct CustomerId(i32);

#[entity_id]
#[derive(Copy)]
pub struct ProjectId(i32);

macro_rules! impl_int_id {
    ($($id:ty),+ $(,)?) => {
        $(
            impl $id {
                pub const fn value(&self) -> i32 {
                    self.0
                }

                /// 标识由调用方分配，必须为正数
                pub const fn is_valid(&self) -> bool {
                    self.0 > 0
                }
            }
        )+
    };
}

impl_int_id!(StudentId, TeamId, CompanyId, CustomerId, ProjectId);
