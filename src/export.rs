use crate::error::ExportError;

/// Hands a generated document to the user as a file.
pub trait ExportSink {
    /// Saves `contents` as `file_name` and returns where it ended up.
    fn save(&mut self, file_name: &str, contents: &str) -> Result<String, ExportError>;
}

/// Writes exports into a directory on disk.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileExport {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileExport {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ExportSink for FileExport {
    fn save(&mut self, file_name: &str, contents: &str) -> Result<String, ExportError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, contents)?;
        log::info!("Exported {}", path.display());
        Ok(path.display().to_string())
    }
}

/// Triggers a browser download through a temporary object URL.
#[cfg(target_arch = "wasm32")]
pub struct BrowserDownload;

#[cfg(target_arch = "wasm32")]
impl ExportSink for BrowserDownload {
    fn save(&mut self, file_name: &str, contents: &str) -> Result<String, ExportError> {
        use wasm_bindgen::JsCast;

        let browser = |what: &str| ExportError::Browser(what.to_owned());
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| browser("no document"))?;

        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/html");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|_| browser("could not create blob"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| browser("could not create object url"))?;

        let anchor = document
            .create_element("a")
            .map_err(|_| browser("could not create link"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| browser("element is not a link"))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        let _ = web_sys::Url::revoke_object_url(&url);

        log::info!("Downloaded {file_name}");
        Ok(file_name.to_owned())
    }
}

/// Keeps exports in memory, for tests.
#[derive(Debug, Default)]
pub struct MemoryExport {
    pub files: Vec<(String, String)>,
}

impl ExportSink for MemoryExport {
    fn save(&mut self, file_name: &str, contents: &str) -> Result<String, ExportError> {
        self.files.push((file_name.to_owned(), contents.to_owned()));
        Ok(file_name.to_owned())
    }
}

/// The platform's default sink.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_sink(config: &crate::config::ToolboxConfig) -> Box<dyn ExportSink> {
    Box::new(FileExport::new(config.export_dir()))
}

#[cfg(target_arch = "wasm32")]
pub fn platform_sink(_config: &crate::config::ToolboxConfig) -> Box<dyn ExportSink> {
    Box::new(BrowserDownload)
}
