use roster_application::command_bus::CommandBus;
use roster_application::context::AppContext;
use roster_application::query_bus::QueryBus;
use roster_application::roster::{
    AssignStudent, FindStudentTeam, GetTeamRoster, RegisterStudent, RegisterTeam, RosterModule,
    TransferStudent,
};
use roster_application::{InMemoryCommandBus, InMemoryQueryBus};
use roster_domain::model::{Student, StudentId, Team, TeamId};
use roster_domain::persist::InMemoryRepository;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let commands = InMemoryCommandBus::new();
    let queries = InMemoryQueryBus::new();
    RosterModule::new(
        Arc::new(InMemoryRepository::<Student>::new()),
        Arc::new(InMemoryRepository::<Team>::new()),
    )
    .register(&commands, &queries)?;

    let ctx = AppContext::default()
        .with_correlation_id("cor-1")
        .with_actor_id("teacher-1");

    for id in 1..=5 {
        let student = Student {
            id: StudentId::new(id),
            name: format!("Student {id}"),
            address: "Main Street 1".into(),
            zip_code: 6700,
            postal_district: "Esbjerg".into(),
            email: None,
        };
        commands.dispatch(&ctx, RegisterStudent { student }).await?;
    }
    for id in [1, 2] {
        commands
            .dispatch(&ctx, RegisterTeam { team_id: TeamId::new(id) })
            .await?;
    }

    for id in 1..=5 {
        let cmd = AssignStudent {
            team_id: TeamId::new(1),
            student_id: StudentId::new(id),
        };
        // 第 5 名学生会因满员被拒绝
        if let Err(err) = commands.dispatch(&ctx, cmd).await {
            eprintln!("AssignStudent rejected: {err}");
        }
    }

    commands
        .dispatch(
            &ctx,
            TransferStudent {
                from_team_id: TeamId::new(1),
                to_team_id: TeamId::new(2),
                student_id: StudentId::new(4),
            },
        )
        .await?;

    for id in [1, 2] {
        let dto = queries
            .dispatch(&ctx, GetTeamRoster { team_id: TeamId::new(id) })
            .await?;
        println!("GetTeamRoster: {dto:?}");
    }
    let dto = queries
        .dispatch(&ctx, FindStudentTeam { student_id: StudentId::new(4) })
        .await?;
    println!("FindStudentTeam: {dto:?}");
    Ok(())
}
