//! Pull and push services running against the in-memory filesystem and a
//! recording Tolgee stand-in.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use toolbox_adapters::MemoryFilesystem;
use toolbox_core::{
    application::{
        PullService, PushService,
        ports::{ExportRequest, FileUpload, SingleStepImport, TranslationServer},
    },
    domain::{
        ExportFormat, ImportFormat, ImportLanguage, Locale, Namespace, Project, ProjectFile,
        ProjectFilesDefinition, ProjectLanguage,
    },
    error::ToolboxResult,
};

/// Answers like a Tolgee project with `en` (id 1) and `nl` (id 2) and
/// records every mutating call.
#[derive(Clone, Default)]
struct RecordingServer {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingServer {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl TranslationServer for RecordingServer {
    fn project_languages(&self, _: &Project) -> ToolboxResult<Vec<ProjectLanguage>> {
        Ok(vec![
            ProjectLanguage {
                id: 1,
                locale: Locale::parse("en").unwrap(),
            },
            ProjectLanguage {
                id: 2,
                locale: Locale::parse("nl").unwrap(),
            },
        ])
    }

    fn project_namespaces(&self, _: &Project) -> ToolboxResult<Vec<Namespace>> {
        Ok(vec![Namespace {
            id: Some(9),
            name: Some("app".into()),
        }])
    }

    fn import_add_file(&self, _: &Project, upload: &FileUpload) -> ToolboxResult<Vec<ImportLanguage>> {
        self.record(format!(
            "add {} {}",
            upload.file_name,
            String::from_utf8_lossy(&upload.content)
        ));
        Ok(vec![ImportLanguage {
            id: 100,
            import_file_name: upload.file_name.clone(),
            import_file_id: 200,
        }])
    }

    fn import_select_namespace(&self, _: &Project, file_id: u64, namespace: &str) -> ToolboxResult<()> {
        self.record(format!("namespace {file_id} {namespace}"));
        Ok(())
    }

    fn import_select_language(&self, _: &Project, import_id: u64, existing: u64) -> ToolboxResult<()> {
        self.record(format!("language {import_id} {existing}"));
        Ok(())
    }

    fn single_step_import(
        &self,
        _: &Project,
        upload: &FileUpload,
        options: &SingleStepImport,
    ) -> ToolboxResult<()> {
        self.record(format!(
            "single {} {} {}",
            upload.file_name, options.locale, options.format
        ));
        Ok(())
    }

    fn export(&self, _: &Project, request: &ExportRequest) -> ToolboxResult<Vec<u8>> {
        Ok(format!("{}:{}", request.format, request.locale).into_bytes())
    }
}

fn project() -> Project {
    let source = ProjectFile::new(
        ProjectFilesDefinition::parse("src/messages_${locale separator=underscore, region_case=lower}.json")
            .unwrap(),
        ImportFormat::JsonIcu,
    );
    let target = ProjectFile::new(
        ProjectFilesDefinition::parse("dist/${locale separator=dash, region_case=upper}/app.json")
            .unwrap(),
        ExportFormat::Json,
    );

    Project {
        path: PathBuf::from("/repo"),
        api_url: "https://tolgee.example".into(),
        project_id: 5,
        namespace: Some("app".into()),
        missing_namespace_fail: true,
        sources: vec![source],
        targets: vec![target],
    }
}

#[test]
fn pull_writes_every_language_into_memory() {
    let fs = MemoryFilesystem::new();
    let service = PullService::new(Box::new(fs.clone()), Box::new(RecordingServer::default()));

    let report = service.pull(&project()).unwrap();

    assert_eq!(report.written.len(), 2);
    assert_eq!(fs.list_files().len(), 2);
    assert_eq!(
        fs.read_to_string(Path::new("/repo/dist/en/app.json")).as_deref(),
        Some("JSON:en")
    );
    assert_eq!(
        fs.read_to_string(Path::new("/repo/dist/nl/app.json")).as_deref(),
        Some("JSON:nl")
    );
}

#[test]
fn pull_writes_literal_target_for_its_locale_only() {
    let mut project = project();
    project.targets = vec![ProjectFile::new(
        ProjectFilesDefinition::parse("dist/Messages.json").unwrap(),
        ExportFormat::Json,
    )
    .with_locale(Locale::parse("en").unwrap())];

    let fs = MemoryFilesystem::new();
    let service = PullService::new(Box::new(fs.clone()), Box::new(RecordingServer::default()));

    let report = service.pull(&project).unwrap();

    assert_eq!(report.written.len(), 1);
    assert_eq!(report.written[0].locale, Locale::parse("en").unwrap());
    assert_eq!(
        fs.read_to_string(Path::new("/repo/dist/Messages.json")).as_deref(),
        Some("JSON:en")
    );
}

#[test]
fn push_uploads_discovered_files() {
    let fs = MemoryFilesystem::new()
        .with_file("/repo/src/messages_nl.json", "{\"hi\":\"hoi\"}")
        .with_file("/repo/src/other.json", "{}");
    let server = RecordingServer::default();
    let service = PushService::new(Box::new(fs), Box::new(server.clone()));

    let report = service.push(&project()).unwrap();

    assert_eq!(report.uploaded.len(), 1);
    let upload_name = &report.uploaded[0].upload_name;
    assert!(upload_name.ends_with("_messages_nl.json"));

    assert_eq!(
        server.calls(),
        vec![
            format!("add {upload_name} {{\"hi\":\"hoi\"}}"),
            "namespace 200 app".to_string(),
            "language 100 2".to_string(),
        ]
    );
}

#[test]
fn push_scopes_exclusions_to_the_matching_entry() {
    let mut project = project();
    project.sources.push(
        ProjectFile::new(
            ProjectFilesDefinition::parse(
                "src/props_${locale separator=underscore, region_case=lower}.properties",
            )
            .unwrap(),
            ImportFormat::PropertiesJava,
        )
        .with_excluded([Locale::parse("nl").unwrap()]),
    );

    let fs = MemoryFilesystem::new()
        .with_file("/repo/src/messages_nl.json", "{}")
        .with_file("/repo/src/props_nl.properties", "hi=hoi");
    let service = PushService::new(Box::new(fs), Box::new(RecordingServer::default()));

    let report = service.push_single_step(&project).unwrap();

    let uploaded: Vec<&Path> = report.uploaded.iter().map(|f| f.path.as_path()).collect();
    assert_eq!(uploaded, vec![Path::new("/repo/src/messages_nl.json")]);
    assert_eq!(report.excluded, 1);
}

#[test]
fn single_step_push_sends_locale_and_format() {
    let fs = MemoryFilesystem::new().with_file("/repo/src/messages_en.json", "{}");
    let server = RecordingServer::default();
    let service = PushService::new(Box::new(fs), Box::new(server.clone()));

    service.push_single_step(&project()).unwrap();

    let calls = server.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with("single "));
    assert!(calls[0].ends_with("_messages_en.json en JSON_ICU"));
}
