//! Blocking HTTP implementation of the `TranslationServer` port.

use std::fmt;

use reqwest::blocking::{
    Client, RequestBuilder, Response,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace, warn};

use toolbox_core::{
    application::{
        ApplicationError,
        ports::{ExportRequest, FileUpload, SingleStepImport, TranslationServer},
    },
    domain::{ImportLanguage, Locale, Namespace, Project, ProjectLanguage},
    error::{ToolboxError, ToolboxResult},
};

use super::json::{
    Collection, ExportJson, FileMappingJson, ForceMode, ImportAddFilesJson, ImportLanguageJson,
    LanguageJson, LanguagesEmbedded, NamespacesEmbedded, SelectNamespaceJson,
    SingleStepParamsJson,
};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// A Tolgee API key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Talks to the Tolgee REST API of whichever server a project points at.
#[derive(Debug)]
pub struct HttpTolgeeClient {
    http: Client,
    api_key: ApiKey,
}

impl HttpTolgeeClient {
    pub fn new(api_key: ApiKey) -> ToolboxResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("tolgee-toolbox/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ToolboxError::Internal {
                message: format!("cannot build HTTP client: {e}"),
            })?;
        Ok(Self { http, api_key })
    }

    fn url(project: &Project, path: &str) -> String {
        format!(
            "{}/v2/projects/{}{}",
            project.api_url.trim_end_matches('/'),
            project.project_id,
            path
        )
    }

    fn reference(project: &Project) -> String {
        format!("project: {}", project.project_id)
    }

    /// Send with credentials, turning anything but 2xx into an error.
    fn send(&self, request: RequestBuilder, reference: &str) -> ToolboxResult<Response> {
        let response = request
            .header(API_KEY_HEADER, self.api_key.expose())
            .send()
            .map_err(|e| ApplicationError::Transport {
                reference: reference.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        trace!(%status, reference, "response received");
        if status.is_success() {
            return Ok(response);
        }

        let details = response.text().unwrap_or_default();
        Err(ApplicationError::Server {
            status: status.as_u16(),
            reference: reference.to_string(),
            details,
        }
        .into())
    }

    fn read_json<T: DeserializeOwned>(response: Response, reference: &str) -> ToolboxResult<T> {
        let malformed = |reason: String| ApplicationError::MalformedResponse {
            reference: reference.to_string(),
            reason,
        };
        let body = response.text().map_err(|e| malformed(e.to_string()))?;
        Ok(serde_json::from_str(&body).map_err(|e| malformed(e.to_string()))?)
    }

    fn file_part(upload: &FileUpload, reference: &str) -> ToolboxResult<Part> {
        Part::bytes(upload.content.clone())
            .file_name(upload.file_name.clone())
            .mime_str("text/plain")
            .map_err(|e| {
                ToolboxError::from(ApplicationError::Transport {
                    reference: reference.to_string(),
                    reason: e.to_string(),
                })
            })
    }
}

/// Map a Tolgee language onto a [`Locale`].
///
/// `None` for tags a locale cannot hold, such as script (`zh-Hant`) or
/// numeric region (`es-419`) subtags.
fn language_from(json: &LanguageJson) -> Option<ProjectLanguage> {
    let parts: Vec<&str> = json.tag.split('-').collect();
    let locale = match parts.as_slice() {
        [language] => Locale::language_only(language),
        [language, region] => Locale::new(language, Some(*region)),
        _ => return None,
    }
    .ok()?;

    Some(ProjectLanguage {
        id: json.id,
        locale,
    })
}

impl TranslationServer for HttpTolgeeClient {
    #[instrument(skip_all, fields(project = project.project_id))]
    fn project_languages(&self, project: &Project) -> ToolboxResult<Vec<ProjectLanguage>> {
        let reference = Self::reference(project);
        let response = self.send(
            self.http.get(Self::url(project, "/languages")),
            &reference,
        )?;
        let page: Collection<LanguagesEmbedded<LanguageJson>> =
            Self::read_json(response, &reference)?;

        let languages = page
            .embedded
            .unwrap_or_default()
            .languages
            .iter()
            .filter_map(|json| {
                let language = language_from(json);
                if language.is_none() {
                    warn!(tag = %json.tag, id = json.id, "skipping unsupported language tag");
                }
                language
            })
            .collect::<Vec<_>>();
        debug!(count = languages.len(), "fetched project languages");
        Ok(languages)
    }

    #[instrument(skip_all, fields(project = project.project_id))]
    fn project_namespaces(&self, project: &Project) -> ToolboxResult<Vec<Namespace>> {
        let reference = Self::reference(project);
        let response = self.send(
            self.http.get(Self::url(project, "/used-namespaces")),
            &reference,
        )?;
        let page: Collection<NamespacesEmbedded> = Self::read_json(response, &reference)?;

        Ok(page
            .embedded
            .unwrap_or_default()
            .namespaces
            .into_iter()
            .map(|ns| Namespace {
                id: ns.id,
                name: ns.name,
            })
            .collect())
    }

    #[instrument(skip_all, fields(project = project.project_id, file = %upload.file_name))]
    fn import_add_file(
        &self,
        project: &Project,
        upload: &FileUpload,
    ) -> ToolboxResult<Vec<ImportLanguage>> {
        let reference = Self::reference(project);
        let form = Form::new().part("files", Self::file_part(upload, &reference)?);
        let response = self.send(
            self.http.post(Self::url(project, "/import")).multipart(form),
            &reference,
        )?;
        let result: ImportAddFilesJson = Self::read_json(response, &reference)?;

        Ok(result
            .result
            .and_then(|page| page.embedded)
            .unwrap_or_default()
            .languages
            .into_iter()
            .map(|l: ImportLanguageJson| ImportLanguage {
                id: l.id,
                import_file_name: l.import_file_name,
                import_file_id: l.import_file_id,
            })
            .collect())
    }

    #[instrument(skip_all, fields(project = project.project_id, import_file_id = import_file_id, namespace = namespace))]
    fn import_select_namespace(
        &self,
        project: &Project,
        import_file_id: u64,
        namespace: &str,
    ) -> ToolboxResult<()> {
        let reference = Self::reference(project);
        let url = Self::url(
            project,
            &format!("/import/result/files/{import_file_id}/select-namespace"),
        );
        self.send(
            self.http.put(url).json(&SelectNamespaceJson { namespace }),
            &reference,
        )?;
        Ok(())
    }

    #[instrument(skip_all, fields(
        project = project.project_id,
        import_language_id = import_language_id,
        existing_language_id = existing_language_id
    ))]
    fn import_select_language(
        &self,
        project: &Project,
        import_language_id: u64,
        existing_language_id: u64,
    ) -> ToolboxResult<()> {
        let reference = Self::reference(project);
        let url = Self::url(
            project,
            &format!(
                "/import/result/languages/{import_language_id}/select-existing/{existing_language_id}"
            ),
        );
        self.send(self.http.put(url), &reference)?;
        Ok(())
    }

    #[instrument(skip_all, fields(project = project.project_id, file = %upload.file_name))]
    fn single_step_import(
        &self,
        project: &Project,
        upload: &FileUpload,
        options: &SingleStepImport,
    ) -> ToolboxResult<()> {
        let reference = Self::reference(project);
        let params = SingleStepParamsJson {
            force_mode: ForceMode::Override,
            override_key_descriptions: false,
            convert_placeholders_to_icu: options.format.is_icu(),
            file_mappings: vec![FileMappingJson {
                file_name: &upload.file_name,
                namespace: options.namespace.as_deref(),
                language_tag: options.locale.to_language_tag(),
                format: options.format.as_str(),
            }],
            tag_new_keys: Vec::new(),
            remove_other_keys: false,
        };
        let params = serde_json::to_string(&params).map_err(|e| ToolboxError::Internal {
            message: format!("cannot encode import parameters: {e}"),
        })?;
        let params = Part::text(params)
            .mime_str("application/json")
            .map_err(|e| ApplicationError::Transport {
                reference: reference.clone(),
                reason: e.to_string(),
            })?;

        let form = Form::new()
            .part("files", Self::file_part(upload, &reference)?)
            .part("params", params);
        self.send(
            self.http
                .post(Self::url(project, "/single-step-import"))
                .multipart(form),
            &reference,
        )?;
        Ok(())
    }

    #[instrument(skip_all, fields(project = project.project_id, locale = %request.locale, format = %request.format))]
    fn export(&self, project: &Project, request: &ExportRequest) -> ToolboxResult<Vec<u8>> {
        let reference = Self::reference(project);
        let body = ExportJson {
            languages: vec![request.locale.to_language_tag()],
            format: request.format.as_str(),
            zip: false,
            filter_namespace: request.namespace.as_deref().map(|ns| vec![ns]),
        };
        let response = self.send(
            self.http.post(Self::url(project, "/export")).json(&body),
            &reference,
        )?;

        let bytes = response
            .bytes()
            .map_err(|e| ApplicationError::MalformedResponse {
                reference: reference.clone(),
                reason: e.to_string(),
            })?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::path::PathBuf;
    use toolbox_core::domain::{ExportFormat, ImportFormat};

    const KEY: &str = "tgpak_test";

    fn project(api_url: String, namespace: Option<&str>) -> Project {
        Project {
            path: PathBuf::from("/work"),
            api_url,
            project_id: 7,
            namespace: namespace.map(str::to_string),
            missing_namespace_fail: false,
            sources: vec![],
            targets: vec![],
        }
    }

    fn client() -> HttpTolgeeClient {
        HttpTolgeeClient::new(ApiKey::new(KEY)).unwrap()
    }

    #[test]
    fn api_key_is_redacted_in_debug() {
        let debug = format!("{:?}", client());
        assert!(!debug.contains(KEY));
        assert!(debug.contains("***"));
    }

    #[test]
    fn fetches_languages_with_api_key() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/v2/projects/7/languages")
            .match_header("x-api-key", KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"_embedded": {"languages": [
                    {"id": 1, "tag": "en", "name": "English"},
                    {"id": 2, "tag": "pt-BR", "name": "Portuguese"}
                ]}})
                .to_string(),
            )
            .create();

        let languages = client()
            .project_languages(&project(server.url(), None))
            .unwrap();

        mock.assert();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[1].id, 2);
        assert_eq!(languages[1].locale, Locale::parse("pt-BR").unwrap());
    }

    #[test]
    fn trailing_slash_in_api_url_is_ignored() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/v2/projects/7/used-namespaces")
            .with_status(200)
            .with_body("{}")
            .create();

        let namespaces = client()
            .project_namespaces(&project(format!("{}/", server.url()), None))
            .unwrap();

        mock.assert();
        assert!(namespaces.is_empty());
    }

    #[test]
    fn unsupported_language_tags_are_skipped() {
        let mut server = Server::new();
        server
            .mock("GET", "/v2/projects/7/languages")
            .with_status(200)
            .with_body(
                json!({"_embedded": {"languages": [
                    {"id": 1, "tag": "en"},
                    {"id": 2, "tag": "zh-Hant"},
                    {"id": 3, "tag": "es-419"},
                    {"id": 4, "tag": "sr-Latn-RS"},
                    {"id": 5, "tag": "nl-NL"}
                ]}})
                .to_string(),
            )
            .create();

        let languages = client()
            .project_languages(&project(server.url(), None))
            .unwrap();

        let ids: Vec<u64> = languages.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(languages[1].locale, Locale::parse("nl-NL").unwrap());
    }

    #[test]
    fn unparseable_language_list_is_malformed() {
        let mut server = Server::new();
        server
            .mock("GET", "/v2/projects/7/languages")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create();

        let err = client()
            .project_languages(&project(server.url(), None))
            .unwrap_err();
        assert!(matches!(
            err,
            ToolboxError::Application(ApplicationError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn reads_namespaces_including_default() {
        let mut server = Server::new();
        server
            .mock("GET", "/v2/projects/7/used-namespaces")
            .with_status(200)
            .with_body(
                json!({"_embedded": {"namespaces": [{"id": null, "name": null}, {"id": 4, "name": "web"}]}})
                    .to_string(),
            )
            .create();

        let namespaces = client()
            .project_namespaces(&project(server.url(), None))
            .unwrap();
        assert_eq!(namespaces.len(), 2);
        assert!(!namespaces[0].is_named());
        assert_eq!(namespaces[1].name.as_deref(), Some("web"));
    }

    #[test]
    fn non_success_status_carries_body() {
        let mut server = Server::new();
        server
            .mock("GET", "/v2/projects/7/languages")
            .with_status(403)
            .with_body("{\"code\":\"operation_not_permitted\"}")
            .create();

        let err = client()
            .project_languages(&project(server.url(), None))
            .unwrap_err();
        match err {
            ToolboxError::Application(ApplicationError::Server {
                status,
                reference,
                details,
            }) => {
                assert_eq!(status, 403);
                assert_eq!(reference, "project: 7");
                assert!(details.contains("operation_not_permitted"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unreachable_server_is_transport_error() {
        let err = client()
            .project_languages(&project("http://127.0.0.1:1".into(), None))
            .unwrap_err();
        assert!(matches!(
            err,
            ToolboxError::Application(ApplicationError::Transport { .. })
        ));
    }

    #[test]
    fn import_uploads_file_and_reads_entries() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/v2/projects/7/import")
            .match_header("x-api-key", KEY)
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex("name=\"files\"; filename=\"abc_Messages_nl.xlf\"".into()),
                Matcher::Regex("<xliff/>".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({"result": {"_embedded": {"languages": [
                    {"id": 11, "importFileName": "abc_Messages_nl.xlf", "importFileId": 5}
                ]}}})
                .to_string(),
            )
            .create();

        let entries = client()
            .import_add_file(
                &project(server.url(), None),
                &FileUpload {
                    file_name: "abc_Messages_nl.xlf".into(),
                    content: b"<xliff/>".to_vec(),
                },
            )
            .unwrap();

        mock.assert();
        assert_eq!(
            entries,
            vec![ImportLanguage {
                id: 11,
                import_file_name: "abc_Messages_nl.xlf".into(),
                import_file_id: 5,
            }]
        );
    }

    #[test]
    fn selects_namespace_and_language() {
        let mut server = Server::new();
        let namespace = server
            .mock("PUT", "/v2/projects/7/import/result/files/5/select-namespace")
            .match_body(Matcher::Json(json!({"namespace": "web"})))
            .with_status(200)
            .create();
        let language = server
            .mock("PUT", "/v2/projects/7/import/result/languages/11/select-existing/2")
            .with_status(200)
            .create();

        let project = project(server.url(), Some("web"));
        client().import_select_namespace(&project, 5, "web").unwrap();
        client().import_select_language(&project, 11, 2).unwrap();

        namespace.assert();
        language.assert();
    }

    #[test]
    fn single_step_import_sends_params() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/v2/projects/7/single-step-import")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex("name=\"params\"".into()),
                Matcher::Regex("\"forceMode\":\"OVERRIDE\"".into()),
                Matcher::Regex("\"convertPlaceholdersToIcu\":true".into()),
                Matcher::Regex("\"languageTag\":\"en-US\"".into()),
                Matcher::Regex("\"format\":\"JSON_ICU\"".into()),
                Matcher::Regex("\"namespace\":\"web\"".into()),
            ]))
            .with_status(200)
            .create();

        client()
            .single_step_import(
                &project(server.url(), Some("web")),
                &FileUpload {
                    file_name: "x_en_US.json".into(),
                    content: b"{}".to_vec(),
                },
                &SingleStepImport {
                    namespace: Some("web".into()),
                    locale: Locale::parse("en-US").unwrap(),
                    format: ImportFormat::JsonIcu,
                },
            )
            .unwrap();

        mock.assert();
    }

    #[test]
    fn export_returns_raw_bytes() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/v2/projects/7/export")
            .match_body(Matcher::Json(json!({
                "languages": ["nl"],
                "format": "JSON",
                "zip": false,
                "filterNamespace": ["web"]
            })))
            .with_status(200)
            .with_body("{\"hello\":\"hallo\"}")
            .create();

        let bytes = client()
            .export(
                &project(server.url(), Some("web")),
                &ExportRequest {
                    locale: Locale::parse("nl").unwrap(),
                    format: ExportFormat::Json,
                    namespace: Some("web".into()),
                },
            )
            .unwrap();

        mock.assert();
        assert_eq!(bytes, b"{\"hello\":\"hallo\"}");
    }

    #[test]
    fn export_without_namespace_omits_filter() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/v2/projects/7/export")
            .match_body(Matcher::Json(json!({
                "languages": ["en-US"],
                "format": "XLIFF",
                "zip": false
            })))
            .with_status(200)
            .with_body("<xliff/>")
            .create();

        client()
            .export(
                &project(server.url(), None),
                &ExportRequest {
                    locale: Locale::parse("en_us").unwrap(),
                    format: ExportFormat::Xliff,
                    namespace: None,
                },
            )
            .unwrap();
        mock.assert();
    }
}
