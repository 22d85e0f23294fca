/// 学生-队伍成员关系示例
/// 展示加入、满员拒绝、转队与移出，以及失败时不产生写入
use anyhow::Result as AnyResult;
use roster_domain::entity::Entity;
use roster_domain::model::{Student, StudentId, Team, TeamId};
use roster_domain::persist::{InMemoryRepository, Repository, TeamRepositoryExt};
use roster_domain::service::{StudentService, StudentTeamService, TeamService};
use std::sync::Arc;

fn student(id: i32, name: &str) -> Student {
    Student {
        id: StudentId::new(id),
        name: name.to_string(),
        address: "Spangsbjerg Kirkevej 103".to_string(),
        zip_code: 6700,
        postal_district: "Esbjerg".to_string(),
        email: None,
    }
}

async fn print_rosters(teams: &InMemoryRepository<Team>) -> AnyResult<()> {
    for team in teams.get_all().await? {
        let names: Vec<_> = team.roster().iter().map(|s| s.name.as_str()).collect();
        println!("   队伍 {}: {:?}", team.id, names);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> AnyResult<()> {
    let students = Arc::new(InMemoryRepository::<Student>::new());
    let teams = Arc::new(InMemoryRepository::<Team>::new());

    // 1) 通过校验服务登记学生与队伍
    let student_service = StudentService::new(Arc::clone(&students));
    for (id, name) in [(1, "Ada"), (2, "Bo"), (3, "Cai"), (4, "Dina"), (5, "Eli")] {
        student_service.add_student(Some(&student(id, name))).await?;
    }
    let team_service = TeamService::new(Arc::clone(&teams));
    for id in [1, 2] {
        team_service
            .add_team(Some(&Team::with_students(id, vec![])))
            .await?;
    }
    println!("✅ 已登记 5 名学生、2 支队伍");

    let service = StudentTeamService::new(Arc::clone(&students), Arc::clone(&teams));
    let team_one = Team::new(TeamId::new(1));
    let team_two = Team::new(TeamId::new(2));

    // 2) 加满队伍 1
    for id in 1..=4 {
        service
            .add_student_to_team(Some(&team_one), Some(&Student::with_id(id)))
            .await?;
    }
    println!("✅ 队伍 1 已满");
    print_rosters(&teams).await?;

    // 3) 满员拒绝
    let err = service
        .add_student_to_team(Some(&team_one), Some(&Student::with_id(5)))
        .await
        .unwrap_err();
    println!("❌ 加入第 5 名学生被拒绝: {err}");

    // 4) 转队后再加入
    service
        .move_student_to_new_team(Some(&team_one), Some(&team_two), Some(&Student::with_id(4)))
        .await?;
    service
        .add_student_to_team(Some(&team_one), Some(&Student::with_id(5)))
        .await?;
    println!("✅ Dina 转入队伍 2，Eli 加入队伍 1");
    print_rosters(&teams).await?;

    // 5) 移出
    service
        .remove_student_from_team(Some(&team_two), Some(&Student::with_id(4)))
        .await?;
    let err = service
        .remove_student_from_team(Some(&team_two), Some(&Student::with_id(4)))
        .await
        .unwrap_err();
    println!("❌ 重复移出被拒绝: {err}");

    let assigned = teams.assigned_students().await?;
    println!("\n✅ 当前已分配学生数: {}", assigned.len());
    Ok(())
}
