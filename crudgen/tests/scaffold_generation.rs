//! Integration tests for scaffold generation

use std::fs;
use std::path::Path;
use std::process::Command;

use crudgen::config::GeneratorConfig;
use crudgen::scaffold::{ArtifactFamily, ArtifactKind, GeneratedFile, ScaffoldGenerator};
use crudgen::ScaffoldError;
use tempfile::TempDir;

fn generator(root: &Path, family: ArtifactFamily, model: &str, fields: &[&str]) -> ScaffoldGenerator {
    ScaffoldGenerator::new(
        model.to_string(),
        fields.iter().map(ToString::to_string).collect(),
        family,
        GeneratorConfig::with_root(root),
    )
    .unwrap()
}

fn find(files: &[GeneratedFile], kind: ArtifactKind) -> &str {
    &files.iter().find(|f| f.kind == kind).unwrap().content
}

fn file_count(root: &Path) -> usize {
    fs::read_dir(root)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            if path.is_dir() {
                file_count(&path)
            } else {
                1
            }
        })
        .sum()
}

/// Four new files in four new directories
#[test]
fn test_model_on_empty_root() {
    let temp_dir = TempDir::new().unwrap();
    let generator = generator(
        temp_dir.path(),
        ArtifactFamily::Model,
        "User",
        &["email:string:true", "age:number:false:18"],
    );

    let (_, report) = generator.run().unwrap();
    assert_eq!(report.created_dirs.len(), 4);
    assert_eq!(report.written.len(), 4);

    for path in [
        "models/User.model.js",
        "validations/User.validation.js",
        "controllers/User.controller.js",
        "routes/User.route.js",
    ] {
        assert!(temp_dir.path().join(path).is_file(), "missing {path}");
    }
    assert_eq!(file_count(temp_dir.path()), 4);

    let model = fs::read_to_string(temp_dir.path().join("models/User.model.js")).unwrap();
    assert!(model.contains("const UserSchema = new mongoose.Schema({"));
    assert!(model.contains("    email: {\n      type: String,\n      required: true\n    },\n    age: {\n      type: Number,\n      default: 18\n    }"));
    assert!(model.contains("mongoose.model('User', UserSchema)"));
}

/// Re-running the same command aborts on the model and touches nothing
#[test]
fn test_rerun_collides_on_model() {
    let temp_dir = TempDir::new().unwrap();
    let fields = ["email:string:true", "age:number:false:18"];
    generator(temp_dir.path(), ArtifactFamily::Model, "User", &fields)
        .run()
        .unwrap();

    let model_path = temp_dir.path().join("models/User.model.js");
    fs::write(&model_path, "// edited by hand").unwrap();
    fs::remove_file(temp_dir.path().join("routes/User.route.js")).unwrap();

    let err = generator(temp_dir.path(), ArtifactFamily::Model, "User", &fields)
        .run()
        .unwrap_err();

    match err {
        ScaffoldError::Collision { path, entity, kind } => {
            assert_eq!(path, model_path);
            assert_eq!(entity, "User");
            assert_eq!(kind, "model");
        }
        other => panic!("Expected collision, got {other:?}"),
    }
    assert_eq!(fs::read_to_string(&model_path).unwrap(), "// edited by hand");
    assert!(!temp_dir.path().join("routes/User.route.js").exists());
}

/// String defaults are quoted, the rule stays optional
#[test]
fn test_string_default() {
    let temp_dir = TempDir::new().unwrap();
    let files = generator(temp_dir.path(), ArtifactFamily::Model, "paint", &["color:string:false:red"])
        .generate()
        .unwrap();

    let model = find(&files, ArtifactKind::Model);
    assert!(model.contains("default: 'red'"));

    let validation = find(&files, ArtifactKind::Validation);
    assert!(validation.contains("color: joi.string()\n"));
    assert!(!validation.contains("required()"));
}

/// Number defaults are raw, required only applies on create
#[test]
fn test_number_default_and_required() {
    let temp_dir = TempDir::new().unwrap();
    let files = generator(temp_dir.path(), ArtifactFamily::Model, "counter", &["count:number:true:0"])
        .generate()
        .unwrap();

    let model = find(&files, ArtifactKind::Model);
    assert!(model.contains("default: 0\n"));
    assert!(!model.contains("'0'"));

    let validation = find(&files, ArtifactKind::Validation);
    let (create, update) = validation.split_once("counterUpdate = joi.object").unwrap();
    assert!(create.contains("count: joi.number().required()"));
    assert!(update.contains("count: joi.number()\n"));
    assert!(!update.contains("required()"));
}

#[test]
fn test_generation_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    let fields = ["title:string:true", "views:number:false:0", "published:boolean", "tags:array"];
    let first = generator(temp_dir.path(), ArtifactFamily::Model, "post", &fields)
        .generate()
        .unwrap();
    let second = generator(temp_dir.path(), ArtifactFamily::Model, "post", &fields)
        .generate()
        .unwrap();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.content, b.content);
    }
}

#[test]
fn test_upload_family_writes_middleware() {
    let temp_dir = TempDir::new().unwrap();
    generator(temp_dir.path(), ArtifactFamily::Upload, "photo", &["caption"])
        .run()
        .unwrap();

    let multer = fs::read_to_string(temp_dir.path().join("middlewares/multer.js")).unwrap();
    assert!(multer.contains("fileSize: 5 * 1024 * 1024"));
    assert!(multer.contains("'image/jpeg', 'image/png', 'image/gif'"));

    let controller = fs::read_to_string(temp_dir.path().join("controllers/photo.controller.js")).unwrap();
    assert!(controller.contains("await photo.deleteOne()"));
    assert!(!controller.contains("updatePhoto"));
}

#[test]
fn test_second_upload_model_collides_on_shared_middleware() {
    let temp_dir = TempDir::new().unwrap();
    generator(temp_dir.path(), ArtifactFamily::Upload, "photo", &[])
        .run()
        .unwrap();

    let err = generator(temp_dir.path(), ArtifactFamily::Upload, "avatar", &[])
        .run()
        .unwrap_err();
    assert!(matches!(err, ScaffoldError::Collision { ref kind, .. } if kind == "middleware"));
    assert!(!temp_dir.path().join("models/avatar.model.js").exists());
}

#[test]
fn test_user_family_writes_auth() {
    let temp_dir = TempDir::new().unwrap();
    generator(temp_dir.path(), ArtifactFamily::User, "account", &["name:string:true"])
        .run()
        .unwrap();

    let auth = fs::read_to_string(temp_dir.path().join("middlewares/auth.js")).unwrap();
    assert!(auth.contains("jwt.verify(token, process.env.SECRET_KEY"));

    let route = fs::read_to_string(temp_dir.path().join("routes/account.route.js")).unwrap();
    assert!(route.contains("router.post('/register', register)"));
    assert!(route.contains("router.post('/login', login)"));
    assert!(route.contains("router.put('/:id', updateAccount)"));

    let model = fs::read_to_string(temp_dir.path().join("models/account.model.js")).unwrap();
    assert!(model.contains("accountSchema.pre(\"save\""));
}

#[test]
fn test_cli_requires_model_name() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_crudgen"))
        .args(["model", "--root"])
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(file_count(temp_dir.path()), 0);
}

#[test]
fn test_cli_generates_then_collides() {
    let temp_dir = TempDir::new().unwrap();
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_crudgen"))
            .arg("--root")
            .arg(temp_dir.path())
            .args(["model", "User", "email:string:true", "age:number:false:18"])
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    };

    let first = run();
    assert!(first.status.success());
    let stdout = String::from_utf8_lossy(&first.stdout);
    assert!(stdout.contains("app.use('/User', UserRoutes)"));
    assert_eq!(file_count(temp_dir.path()), 4);

    let second = run();
    assert_eq!(second.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("Collision"));
    assert!(stderr.contains("User.model.js"));
    assert_eq!(stderr.lines().filter(|line| line.contains("User.model.js")).count(), 1);
    assert!(!stderr.contains("WARN"));
}
