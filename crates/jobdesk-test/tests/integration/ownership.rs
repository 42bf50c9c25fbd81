//! Ownership enforcement across the full auth path, including the
//! end-to-end scenario: register, login, post a job, and have another
//! user's delete attempt rejected.

use jobdesk_service::error::ServiceError;
use jobdesk_service::flow;

use crate::helpers::TestEnv;

#[test_log::test(tokio::test)]
async fn cross_user_delete_is_forbidden() {
    let env = TestEnv::new();

    // alice registers, logs in, and posts a job.
    let (alice, alice_token) = env.signup("alice", "pw123").await;
    let alice_header = TestEnv::bearer(&alice_token);
    let subject = flow::subject_from_header(&env.codec, Some(alice_header.as_str()))
        .expect("alice authenticates");
    assert_eq!(subject, alice.id);

    let job = flow::post_job(&env.store, Some(subject), "Backend Engineer")
        .await
        .expect("alice posts a job");

    // bob logs in with his own token and tries to delete it.
    let (_bob, bob_token) = env.signup("bob", "hunter2").await;
    let bob_header = TestEnv::bearer(&bob_token);
    let bob_subject = flow::subject_from_header(&env.codec, Some(bob_header.as_str()))
        .expect("bob authenticates");

    assert!(matches!(
        flow::delete_job(&env.store, Some(bob_subject), job.id).await,
        Err(ServiceError::Forbidden(_))
    ));

    // alice still can.
    flow::delete_job(&env.store, Some(subject), job.id)
        .await
        .expect("owner deletes");
}

#[test_log::test(tokio::test)]
async fn application_visibility_follows_ownership() {
    let env = TestEnv::new();

    let (alice, _) = env.signup("alice", "pw123").await;
    let (bob, _) = env.signup("bob", "hunter2").await;

    let job = flow::post_job(&env.store, Some(alice.id), "Data Engineer")
        .await
        .expect("alice posts");

    // alice may not apply to her own posting; bob may.
    assert!(matches!(
        flow::apply_to_job(&env.store, Some(alice.id), job.id).await,
        Err(ServiceError::Forbidden(_))
    ));
    let application = flow::apply_to_job(&env.store, Some(bob.id), job.id)
        .await
        .expect("bob applies");

    // Only alice sees applications to her job.
    let listed = flow::applications_for_job(&env.store, Some(alice.id), job.id)
        .await
        .expect("owner lists");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, application.id);

    assert!(matches!(
        flow::applications_for_job(&env.store, Some(bob.id), job.id).await,
        Err(ServiceError::Forbidden(_))
    ));

    // bob sees his own submissions without any ownership check.
    let own = flow::applications_by_user(&env.store, Some(bob.id))
        .await
        .expect("own listing");
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].job, job.id);
}

#[test_log::test(tokio::test)]
async fn guarded_operations_require_a_subject() {
    let env = TestEnv::new();
    let (alice, _) = env.signup("alice", "pw123").await;

    let job = flow::post_job(&env.store, Some(alice.id), "SRE")
        .await
        .expect("alice posts");

    assert!(matches!(
        flow::post_job(&env.store, None, "Ghost Job").await,
        Err(ServiceError::NotAuthenticated)
    ));
    assert!(matches!(
        flow::applications_for_job(&env.store, None, job.id).await,
        Err(ServiceError::NotAuthenticated)
    ));
}
