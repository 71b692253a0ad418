//! Integration tests for module reconciliation and file generation

use std::fs;
use std::path::Path;

use modforge_cli_lib::scaffold::{CreateMode, Reconciler};
use modforge_cli_lib::{
    FileRole, ModulePath, Outcome, Printer, ScaffoldConfig, Scaffolder, ScriptedPrompter,
};
use tempfile::TempDir;

fn scaffolder(root: &Path) -> Scaffolder {
    Scaffolder::new(root, &ScaffoldConfig::default()).with_printer(Printer::new(false))
}

fn seed(dir: &Path, identifier: &str, roles: &[FileRole], content: &str) {
    fs::create_dir_all(dir).unwrap();
    for role in roles {
        fs::write(dir.join(role.file_name(identifier)), content).unwrap();
    }
}

fn snapshot(dir: &Path) -> Vec<(String, String)> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            (
                entry.file_name().to_string_lossy().into_owned(),
                fs::read_to_string(entry.path()).unwrap(),
            )
        })
        .collect();
    files.sort();
    files
}

#[test]
fn test_complete_module_is_left_untouched() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("src/modules/user");
    seed(&dir, "user", &FileRole::ALL, "// hand written");
    let before = snapshot(&dir);

    let mut prompter = ScriptedPrompter::default();
    let outcome = scaffolder(temp.path())
        .run(ModulePath::parse("user").unwrap(), &mut prompter)
        .unwrap();

    assert!(matches!(outcome, Outcome::AlreadyExists { .. }));
    assert!(prompter.asked().is_empty());
    assert_eq!(snapshot(&dir), before);
}

#[test]
fn test_empty_module_gets_all_four_files() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("src/modules/product");
    fs::create_dir_all(&dir).unwrap();

    let mut prompter = ScriptedPrompter::default();
    let outcome = scaffolder(temp.path())
        .run(ModulePath::parse("Product").unwrap(), &mut prompter)
        .unwrap();

    assert!(prompter.asked().is_empty());
    let roles: Vec<_> = outcome.written().iter().map(|f| f.role).collect();
    assert_eq!(roles, FileRole::ALL);

    let controller = fs::read_to_string(dir.join("product.controller.ts")).unwrap();
    assert!(controller.contains("ProductController"));
    assert!(controller.contains("from '../../shared/catchAsync'"));
}

#[test]
fn test_partial_module_create_all_writes_only_missing() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("src/modules/order");
    seed(
        &dir,
        "order",
        &[FileRole::Controller, FileRole::Route, FileRole::Service],
        "// keep",
    );

    let mut prompter = ScriptedPrompter::new(["2"]);
    let outcome = scaffolder(temp.path())
        .run(ModulePath::parse("order").unwrap(), &mut prompter)
        .unwrap();

    assert_eq!(prompter.asked().len(), 1);
    assert!(prompter.asked()[0].contains("order.validation.ts"));

    let written = outcome.written();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].role, FileRole::Validation);
    assert_eq!(
        fs::read_to_string(dir.join("order.service.ts")).unwrap(),
        "// keep"
    );
    assert!(dir.join("order.validation.ts").is_file());
}

#[test]
fn test_partial_module_one_by_one() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("src/modules/order");
    seed(&dir, "order", &[FileRole::Controller], "// keep");

    let mut prompter = ScriptedPrompter::new(["1", "y", "n", "yes"]);
    let outcome = scaffolder(temp.path())
        .run(ModulePath::parse("order").unwrap(), &mut prompter)
        .unwrap();

    let roles: Vec<_> = outcome.written().iter().map(|f| f.role).collect();
    assert_eq!(roles, [FileRole::Route, FileRole::Validation]);
    assert!(!dir.join("order.service.ts").exists());
}

#[test]
fn test_unrecognized_answer_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("src/modules/order");
    seed(&dir, "order", &[FileRole::Route], "// keep");
    let before = snapshot(&dir);

    let outcome = scaffolder(temp.path())
        .run(
            ModulePath::parse("order").unwrap(),
            &mut ScriptedPrompter::new(["3"]),
        )
        .unwrap();

    assert_eq!(
        outcome,
        Outcome::Aborted {
            response: "3".to_string()
        }
    );
    assert_eq!(snapshot(&dir), before);
}

#[test]
fn test_nested_module_import_depth() {
    let temp = TempDir::new().unwrap();
    let outcome = scaffolder(temp.path())
        .run(
            ModulePath::parse("a/b/widget").unwrap(),
            &mut ScriptedPrompter::default(),
        )
        .unwrap();

    assert_eq!(outcome.written().len(), 4);

    let dir = temp.path().join("src/modules/a/b/widget");
    let service = fs::read_to_string(dir.join("widget.service.ts")).unwrap();
    assert!(service.contains("from '../../../../errors/ApiError'"));

    let route = fs::read_to_string(dir.join("widget.route.ts")).unwrap();
    assert!(route.contains("from '../../../../middlewares/validateRequest'"));
}

#[test]
fn test_existing_only_does_not_create_directory() {
    let temp = TempDir::new().unwrap();
    let outcome = scaffolder(temp.path())
        .with_create_mode(CreateMode::ExistingOnly)
        .run(
            ModulePath::parse("ghost").unwrap(),
            &mut ScriptedPrompter::default(),
        )
        .unwrap();

    assert!(matches!(outcome, Outcome::NotFound { .. }));
    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_assume_all_reconciler_skips_prompt() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("src/modules/cart");
    seed(&dir, "cart", &[FileRole::Controller, FileRole::Route], "// keep");

    let mut prompter = ScriptedPrompter::default();
    let outcome = scaffolder(temp.path())
        .with_reconciler(Reconciler::assume_all())
        .run(ModulePath::parse("cart").unwrap(), &mut prompter)
        .unwrap();

    assert!(prompter.asked().is_empty());
    assert_eq!(outcome.written().len(), 2);
}

#[test]
fn test_custom_modules_root() {
    let temp = TempDir::new().unwrap();
    let config = ScaffoldConfig {
        modules_root: "src/app/modules".into(),
        ..ScaffoldConfig::default()
    };

    Scaffolder::new(temp.path(), &config)
        .with_printer(Printer::new(false))
        .run(
            ModulePath::parse("user").unwrap(),
            &mut ScriptedPrompter::default(),
        )
        .unwrap();

    assert!(temp
        .path()
        .join("src/app/modules/user/user.route.ts")
        .is_file());
}
