//! Full lifecycle: draft, publish, public visits, resumable submission,
//! review, and statistics.

use std::collections::HashMap;
use std::sync::Arc;

use formforge::{FieldAttributes, FieldId, FieldRegistry, FieldType, FormDocument};
use formforge_workflow::{
    FormEngine, LifecycleError, MemoryFormStore, OwnerId, ProgressTag, ShareId,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn survey_document() -> FormDocument {
    let mut doc = FormDocument::new();
    doc.push(FieldType::Title.construct(FieldId::from("heading")));

    let mut name = FieldType::Text.construct(FieldId::from("name"));
    if let FieldAttributes::Text(attrs) = &mut name.attributes {
        attrs.required = true;
    }
    doc.push(name);

    doc.push(FieldType::Checkbox.construct(FieldId::from("newsletter")));
    doc
}

#[tokio::test]
async fn draft_to_published_submission_flow() {
    init_tracing();
    let engine = FormEngine::new(Arc::new(MemoryFormStore::new()), FieldRegistry::standard());
    let owner = OwnerId::new();

    let form = engine
        .create_form(owner, "Onboarding survey", "Tell us about yourself")
        .await
        .unwrap();

    let doc = survey_document();
    engine.save_draft(owner, form.form_id, &doc).await.unwrap();

    let published = engine.publish(owner, form.form_id).await.unwrap();
    let share_id = published.share_id.expect("publish assigns a share id");

    // Two visitor sessions open the form.
    let shared = engine.open_shared_form(share_id).await.unwrap();
    assert_eq!(shared.document, doc);
    engine.open_shared_form(share_id).await.unwrap();

    // One visitor saves progress twice; the second save wins.
    let tag = ProgressTag::from("session-abc");
    engine
        .save_progress(
            share_id,
            tag.clone(),
            HashMap::from([(FieldId::from("name"), "a".to_string())]),
        )
        .await
        .unwrap();
    let partial = engine
        .save_progress(
            share_id,
            tag.clone(),
            HashMap::from([(FieldId::from("name"), "b".to_string())]),
        )
        .await
        .unwrap();
    assert!(!partial.is_completed());
    assert_eq!(partial.values[&FieldId::from("name")], "b");

    // Final submit completes the same record.
    let completed = engine
        .submit(
            share_id,
            Some(tag.clone()),
            HashMap::from([(FieldId::from("name"), "Ada Lovelace".to_string())]),
        )
        .await
        .unwrap();
    assert!(completed.is_completed());
    assert_eq!(completed.submission_id, partial.submission_id);

    // Review shows a single completed submission with the final values.
    let submissions = engine.list_submissions(owner, form.form_id).await.unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(
        submissions[0].values[&FieldId::from("name")],
        "Ada Lovelace"
    );
    assert_eq!(submissions[0].form_snapshot, doc.serialize().unwrap());

    // Two visits, one submission.
    let stats = engine.stats(owner, form.form_id).await.unwrap();
    assert_eq!(stats.visits, 2);
    assert_eq!(stats.submissions, 1);
    assert!((stats.submission_rate - 50.0).abs() < 1e-9);
    assert!((stats.bounce_rate - 50.0).abs() < 1e-9);

    // The tag is now terminal.
    assert!(matches!(
        engine.save_progress(share_id, tag, HashMap::new()).await,
        Err(LifecycleError::AlreadySubmitted)
    ));
}

#[tokio::test]
async fn unknown_share_id_is_not_found() {
    let engine = FormEngine::new(Arc::new(MemoryFormStore::new()), FieldRegistry::standard());
    assert!(matches!(
        engine.open_shared_form(ShareId::new()).await,
        Err(LifecycleError::NotFound)
    ));
    assert!(matches!(
        engine
            .save_progress(ShareId::new(), ProgressTag::from("x"), HashMap::new())
            .await,
        Err(LifecycleError::NotFound)
    ));
}

#[tokio::test]
async fn submissions_without_a_tag_each_create_a_record() {
    let engine = FormEngine::new(Arc::new(MemoryFormStore::new()), FieldRegistry::standard());
    let owner = OwnerId::new();
    let form = engine.create_form(owner, "Poll", "").await.unwrap();
    let published = engine.publish(owner, form.form_id).await.unwrap();
    let share_id = published.share_id.unwrap();

    engine.submit(share_id, None, HashMap::new()).await.unwrap();
    engine.submit(share_id, None, HashMap::new()).await.unwrap();

    let submissions = engine.list_submissions(owner, form.form_id).await.unwrap();
    assert_eq!(submissions.len(), 2);
    assert!(submissions.iter().all(|s| s.progress_tag.is_none()));

    let stats = engine.stats(owner, form.form_id).await.unwrap();
    assert_eq!(stats.submissions, 2);
    assert_eq!(stats.visits, 0);
    assert_eq!(stats.submission_rate, 0.0);
    assert_eq!(stats.bounce_rate, 100.0);
}
