use dial_core::{CookieScope, SharedStore};
use web_sys as web;

/// `document.cookie` entry visible to every tab on the cookie's domain/path.
pub struct CookieStore {
    document: web::HtmlDocument,
    scope: CookieScope,
}

impl CookieStore {
    pub fn new(document: web::HtmlDocument, scope: CookieScope) -> Self {
        Self { document, scope }
    }

    #[inline]
    pub fn scope(&self) -> &CookieScope {
        &self.scope
    }
}

impl SharedStore for CookieStore {
    fn get(&self) -> Option<String> {
        let jar = match self.document.cookie() {
            Ok(jar) => jar,
            Err(e) => {
                log::warn!("[cookie] read failed: {:?}", e);
                return None;
            }
        };
        self.scope.lookup(&jar).map(str::to_owned)
    }

    fn set(&self, value: &str) {
        if let Err(e) = self.document.set_cookie(&self.scope.directive(value)) {
            log::warn!("[cookie] write failed: {:?}", e);
        }
    }
}
