#![allow(dead_code)]

use cors_header_scrutiny::{
    HeaderScrutiny, RequestContext, ScrutinyDecision, ScrutinyError, ScrutinyOptions,
};

#[derive(Default)]
pub struct ScrutinyBuilder {
    exclusion_paths: Option<String>,
}

impl ScrutinyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exclusion_paths(mut self, raw: impl Into<String>) -> Self {
        self.exclusion_paths = Some(raw.into());
        self
    }

    pub fn build(self) -> HeaderScrutiny {
        let options = ScrutinyOptions::from_parameter(self.exclusion_paths.as_deref())
            .expect("valid scrutiny configuration");
        HeaderScrutiny::new(options).expect("valid scrutiny configuration")
    }
}

#[derive(Clone)]
pub struct RequestBuilder {
    path: String,
    context_path: String,
    headers: Vec<(String, String)>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            path: "/".into(),
            context_path: String::new(),
            headers: Vec::new(),
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn context_path(mut self, context_path: impl Into<String>) -> Self {
        self.context_path = context_path.into();
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn origin(self, value: impl Into<String>) -> Self {
        self.header("Origin", value)
    }

    pub fn referer(self, value: impl Into<String>) -> Self {
        self.header("Referer", value)
    }

    pub fn host(self, value: impl Into<String>) -> Self {
        self.header("Host", value)
    }

    pub fn forwarded_host(self, value: impl Into<String>) -> Self {
        self.header("X-Forwarded-Host", value)
    }

    pub fn try_evaluate(
        &self,
        scrutiny: &HeaderScrutiny,
    ) -> Result<ScrutinyDecision, ScrutinyError> {
        let ctx = RequestContext::new(&self.path, &self.headers)
            .with_context_path(&self.context_path);
        scrutiny.evaluate(&ctx)
    }

    pub fn evaluate(&self, scrutiny: &HeaderScrutiny) -> ScrutinyDecision {
        self.try_evaluate(scrutiny)
            .expect("request evaluation should succeed")
    }
}

pub fn scrutiny() -> ScrutinyBuilder {
    ScrutinyBuilder::new()
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}
