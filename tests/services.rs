use serde_json::json;
use template_catalog::domain::types::{CategoryId, EntityKind};
use template_catalog::forms::categories::{CreateCategoryForm, CreateCategoryPayload};
use template_catalog::forms::templates::{
    CreateTemplateForm, CreateTemplatePayload, ListTemplatesQuery,
};
use template_catalog::pagination::Pagination;
use template_catalog::repository::UnitOfWork;
use template_catalog::services::ServiceError;
use template_catalog::services::categories::create_category;
use template_catalog::services::commit::commit;
use template_catalog::services::templates::{
    create_template, delete_template_by_id, find_all_templates, find_templates_by_category,
    list_templates,
};

mod common;

fn template_form(name: &str, category_id: CategoryId) -> CreateTemplateForm {
    serde_json::from_value(json!({
        "name": name,
        "displayName": format!("{name} display"),
        "categoryId": category_id.get(),
        "preview": {"aspectRatio": 1.0, "imageURL": "https://example.com/preview.png"},
        "templateData": {"aiFilter": {"aiFilter": {"userPrompt": {"title": "Create your avatar"}}}}
    }))
    .expect("valid form json")
}

#[test]
fn create_commit_and_list() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let mut work = UnitOfWork::new();
    let form = CreateCategoryForm {
        name: "Cartoon".to_string(),
        display_name: "Cartoon".to_string(),
    };
    let payload: CreateCategoryPayload = form.try_into().expect("valid category form");
    create_category(payload, &repo, &mut work).expect("should stage category");
    let category = commit(work, &repo)
        .expect("should commit category")
        .categories
        .remove(0);

    let mut work = UnitOfWork::new();
    let payload: CreateTemplatePayload = template_form("Starter pack", category.id)
        .try_into()
        .expect("valid template form");
    let staged = create_template(payload.clone(), &repo, &mut work).expect("should stage");
    assert_eq!(staged.category, category);

    let listed = find_all_templates(Pagination::default(), &repo).unwrap();
    assert_eq!(listed.total, 0, "nothing is durable before commit");

    let receipt = commit(work, &repo).expect("should commit template");
    let stored = &receipt.templates[0];
    assert_eq!(stored.name, payload.name);
    assert_eq!(stored.display_name, payload.display_name);
    assert_eq!(stored.preview, payload.preview);
    assert_eq!(stored.template_data, payload.template_data);
    assert_eq!(stored.category_id, Some(category.id));

    let page = list_templates(
        &ListTemplatesQuery {
            category_id: Some(category.id.get()),
            page: Some(1),
            per_page: Some(20),
        },
        &repo,
    )
    .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(&page.data[0], stored);
    let meta = page.meta();
    assert_eq!(meta.total_pages, 1);
    assert!(!meta.has_next);
    assert!(!meta.has_previous);
}

#[test]
fn duplicate_name_is_rejected_early() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    let category = common::insert_category(&repo, "Business");

    let mut work = UnitOfWork::new();
    let payload: CreateTemplatePayload = template_form("SMEG Blender", category.id)
        .try_into()
        .unwrap();
    create_template(payload, &repo, &mut work).unwrap();
    commit(work, &repo).unwrap();

    let mut work = UnitOfWork::new();
    let payload: CreateTemplatePayload = template_form("SMEG Blender", CategoryId::new(404).unwrap())
        .try_into()
        .unwrap();
    let err = create_template(payload, &repo, &mut work).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::NameConflict {
            entity: EntityKind::Template,
            ..
        }
    ));
    assert!(work.is_empty());
}

#[test]
fn concurrent_creates_lose_at_commit_with_same_error() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    let category = common::insert_category(&repo, "Business");

    let mut first = UnitOfWork::new();
    let mut second = UnitOfWork::new();
    let payload: CreateTemplatePayload = template_form("Race", category.id).try_into().unwrap();
    create_template(payload.clone(), &repo, &mut first).expect("first passes the check");
    create_template(payload, &repo, &mut second).expect("second passes the check too");

    commit(first, &repo).expect("first commit wins");
    let err = commit(second, &repo).unwrap_err();

    match err {
        ServiceError::NameConflict { entity, name } => {
            assert_eq!(entity, EntityKind::Template);
            assert_eq!(name, "Race");
        }
        other => panic!("expected name conflict, got {other:?}"),
    }
    assert_eq!(find_all_templates(Pagination::default(), &repo).unwrap().total, 1);
}

#[test]
fn unknown_category_is_reported() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let mut work = UnitOfWork::new();
    let payload: CreateTemplatePayload = template_form("Lonely", CategoryId::new(77).unwrap())
        .try_into()
        .unwrap();
    let err = create_template(payload, &repo, &mut work).unwrap_err();

    assert!(matches!(err, ServiceError::CategoryNotFound(id) if id.get() == 77));
    assert!(work.is_empty());
}

#[test]
fn listing_unknown_category_is_empty() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    let category = common::insert_category(&repo, "Business");
    common::insert_templates(&repo, &category, "Template", 3);

    let page =
        find_templates_by_category(CategoryId::new(999).unwrap(), Pagination::default(), &repo)
            .unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn delete_by_id_is_staged_until_commit() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    let category = common::insert_category(&repo, "Business");
    common::insert_templates(&repo, &category, "Template", 2);
    let page = find_all_templates(Pagination::default(), &repo).unwrap();
    let target = page.data[0].id;

    let mut work = UnitOfWork::new();
    delete_template_by_id(target.get(), &repo, &mut work).expect("should stage delete");
    assert_eq!(find_all_templates(Pagination::default(), &repo).unwrap().total, 2);

    commit(work, &repo).expect("should commit delete");
    let page = find_all_templates(Pagination::default(), &repo).unwrap();
    assert_eq!(page.total, 1);
    assert!(page.data.iter().all(|t| t.id != target));

    let mut work = UnitOfWork::new();
    let err = delete_template_by_id(target.get(), &repo, &mut work).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));
}

#[test]
fn huge_page_number_lists_an_empty_page() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();
    let category = common::insert_category(&repo, "Business");
    common::insert_templates(&repo, &category, "Template", 3);

    for page in [1 << 60, i64::MAX] {
        let query = ListTemplatesQuery {
            category_id: None,
            page: Some(page),
            per_page: Some(100),
        };
        let listed = list_templates(&query, &repo).expect("should list");
        assert!(listed.data.is_empty());
        assert_eq!(listed.total, 3);
        assert!(!listed.has_next());
    }

    let query = ListTemplatesQuery {
        category_id: Some(category.id.get()),
        page: Some(i64::MAX),
        per_page: Some(100),
    };
    let listed = list_templates(&query, &repo).expect("should list category");
    assert!(listed.data.is_empty());
    assert_eq!(listed.total, 3);
}

#[test]
fn invalid_form_becomes_validation_error() {
    let form: CreateTemplateForm = serde_json::from_value(json!({
        "displayName": "No name",
        "categoryId": 1,
        "preview": 5
    }))
    .unwrap();

    let err: ServiceError = CreateTemplatePayload::try_from(form).unwrap_err().into();

    match err {
        ServiceError::Validation(errors) => {
            assert!(errors.get("name").is_some());
            assert_eq!(errors.get("preview"), Some("Preview must be an object"));
            assert!(errors.get("displayName").is_none());
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
