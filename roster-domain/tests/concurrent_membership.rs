use roster_domain::entity::Entity;
use roster_domain::model::{MAX_STUDENTS, Student, Team, TeamId};
use roster_domain::persist::{InMemoryRepository, Repository};
use roster_domain::service::StudentTeamService;
use std::collections::HashSet;
use std::sync::Arc;

type Service = StudentTeamService<Arc<InMemoryRepository<Student>>, Arc<InMemoryRepository<Team>>>;

fn service(students: i32, teams: i32) -> Service {
    StudentTeamService::new(
        Arc::new(InMemoryRepository::with_items((1..=students).map(Student::with_id))),
        Arc::new(InMemoryRepository::with_items(
            (1..=teams).map(|id| Team::with_students(id, vec![])),
        )),
    )
}

async fn assert_invariants(service: &Service) {
    let teams = service.teams().get_all().await.unwrap();
    let mut seen = HashSet::new();
    for team in &teams {
        assert!(team.len() <= MAX_STUDENTS, "team {} over capacity", team.id);
        for id in team.student_ids() {
            assert!(seen.insert(id), "student {id} on more than one roster");
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_adds_to_one_team_respect_capacity() {
    let service = service(32, 1);

    let handles: Vec<_> = (1..=32)
        .map(|id| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .add_student_to_team(
                        Some(&Team::new(TeamId::new(1))),
                        Some(&Student::with_id(id)),
                    )
                    .await
            })
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => accepted += 1,
            Err(err) => assert_eq!(err.reason(), "Team is full"),
        }
    }

    assert_eq!(accepted, MAX_STUDENTS);
    assert_invariants(&service).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_adds_of_one_student_assign_once() {
    let service = service(1, 8);

    let handles: Vec<_> = (1..=8)
        .map(|team| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .add_student_to_team(
                        Some(&Team::new(TeamId::new(team))),
                        Some(&Student::with_id(1)),
                    )
                    .await
            })
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(()) => accepted += 1,
            Err(err) => assert_eq!(err.reason(), "Student is already assigned to a team"),
        }
    }

    assert_eq!(accepted, 1);
    assert_invariants(&service).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn mixed_operations_keep_rosters_consistent() {
    let service = service(16, 4);
    for id in 1..=8 {
        let team = Team::new(TeamId::new((id - 1) / 2 + 1));
        service
            .add_student_to_team(Some(&team), Some(&Student::with_id(id)))
            .await
            .unwrap();
    }

    // 结果允许失败，只要求不变式始终成立
    let handles: Vec<_> = (0..64)
        .map(|n: i32| {
            let service = service.clone();
            tokio::spawn(async move {
                let student = Student::with_id(n % 16 + 1);
                let a = Team::new(TeamId::new(n % 4 + 1));
                let b = Team::new(TeamId::new((n + 1) % 4 + 1));
                let _ = match n % 3 {
                    0 => service.add_student_to_team(Some(&a), Some(&student)).await,
                    1 => {
                        service
                            .move_student_to_new_team(Some(&a), Some(&b), Some(&student))
                            .await
                    }
                    _ => service.remove_student_from_team(Some(&a), Some(&student)).await,
                };
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }
    assert_invariants(&service).await;
}
