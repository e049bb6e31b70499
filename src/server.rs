// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A small blocking HTTP front end.  Three routes:
//!
//! * `/generate` renders a frame from query parameters as plain text,
//! * `/gallery` shows the gallery file wrapped in a page,
//! * anything else serves the interactive form.
//!
//! Routing is a pure function of the request target so it can be
//! tested without a socket; `serve` only moves bytes.

use std::collections::HashMap;
use tiny_http::{Header, Request, Response, Server};
use url::form_urlencoded;

use crate::errors::BrotError;
use crate::gallery::Gallery;
use crate::presets::PRESETS;
use crate::render::AsciiRenderer;
use crate::view::View;

/// Largest grid width a request may ask for.
pub const MAX_WIDTH: i64 = 1000;
/// Largest grid height a request may ask for.
pub const MAX_HEIGHT: i64 = 1000;
/// Largest iteration limit a request may ask for.
pub const MAX_ITER: i64 = 100_000;
/// Fewest request handlers `serve` runs, however few cores there are.
pub const MIN_HANDLERS: usize = 4;

const HOME_TEMPLATE: &str = include_str!("templates/home.html");
const GALLERY_TEMPLATE: &str = include_str!("templates/gallery.html");

const HTML: &str = "text/html; charset=utf-8";
const TEXT: &str = "text/plain; charset=utf-8";

/// What to send back for one request.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    /// HTTP status code
    pub status: u16,
    /// Value of the Content-Type header
    pub content_type: &'static str,
    /// Response body
    pub body: String,
}

impl Reply {
    fn new(status: u16, content_type: &'static str, body: String) -> Self {
        Reply {
            status,
            content_type,
            body,
        }
    }
}

// Absent, unparsable and zero values all fall back to the default.
fn int_param(params: &HashMap<String, String>, key: &str, default: i64) -> i64 {
    match params.get(key).and_then(|v| v.parse::<i64>().ok()) {
        Some(0) | None => default,
        Some(v) => v,
    }
}

fn float_param(params: &HashMap<String, String>, key: &str, default: f64) -> f64 {
    match params.get(key).and_then(|v| v.parse::<f64>().ok()) {
        Some(v) if v != 0.0 => v,
        _ => default,
    }
}

fn check_limit(name: &'static str, value: i64, limit: i64) -> Result<(), BrotError> {
    if value > limit {
        return Err(BrotError::OverLimit { name, value, limit });
    }
    Ok(())
}

/// Builds a view from a `/generate` query string such as
/// `width=80&height=40&maxiter=100&xmin=-2.5&xmax=1&ymin=-1.25&ymax=1.25`.
/// Only the first occurrence of a key counts.
pub fn view_from_query(query: &str) -> Result<View, BrotError> {
    let mut params: HashMap<String, String> = HashMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        params.entry(key.into_owned()).or_insert_with(|| value.into_owned());
    }

    let defaults = View::default();
    let width = int_param(&params, "width", defaults.width as i64);
    let height = int_param(&params, "height", defaults.height as i64);
    let max_iter = int_param(&params, "maxiter", defaults.max_iter as i64);

    if width < 2 || height < 2 {
        return Err(BrotError::TooSmall { width, height });
    }
    if max_iter < 1 {
        return Err(BrotError::ZeroIterations);
    }
    check_limit("width", width, MAX_WIDTH)?;
    check_limit("height", height, MAX_HEIGHT)?;
    check_limit("maxiter", max_iter, MAX_ITER)?;

    let view = View {
        width: width as usize,
        height: height as usize,
        max_iter: max_iter as usize,
        x_min: float_param(&params, "xmin", defaults.x_min),
        x_max: float_param(&params, "xmax", defaults.x_max),
        y_min: float_param(&params, "ymin", defaults.y_min),
        y_max: float_param(&params, "ymax", defaults.y_max),
    };
    view.validate()?;
    Ok(view)
}

/// The interactive form, with one quick select button per preset.
pub fn home_page() -> String {
    let buttons: Vec<String> = PRESETS
        .iter()
        .map(|p| {
            format!(
                "                <button onclick=\"loadPreset('{}')\">{}</button>",
                p.name, p.label
            )
        })
        .collect();
    let table: Vec<String> = PRESETS
        .iter()
        .map(|p| {
            let v = &p.view;
            format!(
                "            '{}': {{width: {}, height: {}, maxiter: {}, xmin: {}, xmax: {}, ymin: {}, ymax: {}}}",
                p.name, v.width, v.height, v.max_iter, v.x_min, v.x_max, v.y_min, v.y_max
            )
        })
        .collect();
    HOME_TEMPLATE
        .replace("{{preset_buttons}}", &buttons.join("\n"))
        .replace("{{preset_table}}", &table.join(",\n"))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The gallery file wrapped in a page.
pub fn gallery_page(contents: &str) -> String {
    GALLERY_TEMPLATE.replace("{{gallery}}", &escape_html(contents))
}

fn generate(query: &str, threads: usize) -> Reply {
    let rendered = view_from_query(query)
        .and_then(AsciiRenderer::new)
        .and_then(|renderer| renderer.with_threads(threads).render(true));
    match rendered {
        Ok(frame) => Reply::new(200, TEXT, frame),
        Err(BrotError::Io(e)) => Reply::new(500, TEXT, format!("{}\n", e)),
        Err(e) => Reply::new(400, TEXT, format!("{}\n", e)),
    }
}

fn show_gallery(gallery: &Gallery) -> Reply {
    match gallery.read() {
        Ok(Some(contents)) => Reply::new(200, HTML, gallery_page(&contents)),
        Ok(None) => Reply::new(404, TEXT, "Gallery not found\n".to_string()),
        Err(e) => {
            error!("could not read {}: {}", gallery.path().display(), e);
            Reply::new(500, TEXT, "Gallery unavailable\n".to_string())
        }
    }
}

/// Answers one request target (path plus optional query string).
pub fn route(target: &str, gallery: &Gallery, threads: usize) -> Reply {
    let (path, query) = match target.find('?') {
        Some(index) => (&target[..index], &target[index + 1..]),
        None => (target, ""),
    };
    match path {
        "/generate" => generate(query, threads),
        "/gallery" => show_gallery(gallery),
        _ => Reply::new(200, HTML, home_page()),
    }
}

/// Turns a port flag into something to bind.  `:8080` and `8080` bind
/// every interface; anything else is taken as `host:port`.
pub fn bind_address(port: &str) -> String {
    if port.starts_with(':') {
        format!("0.0.0.0{}", port)
    } else if port.parse::<u16>().is_ok() {
        format!("0.0.0.0:{}", port)
    } else {
        port.to_string()
    }
}

/// Binds the listener for a port flag.
pub fn bind(port: &str) -> Result<Server, BrotError> {
    let address = bind_address(port);
    Server::http(&address).map_err(|e| BrotError::Server(address, e.to_string()))
}

/// How many requests are answered at once by `serve`.
pub fn handler_count() -> usize {
    num_cpus::get().max(MIN_HANDLERS)
}

fn respond(request: Request, gallery: &Gallery, threads: usize) {
    let reply = route(request.url(), gallery, threads);
    info!("{} {} -> {}", request.method(), request.url(), reply.status);

    let mut response = Response::from_string(reply.body).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
        response.add_header(header);
    }
    if let Err(e) = request.respond(response) {
        warn!("failed to send response: {}", e);
    }
}

/// Answers requests on `server` from `handlers` worker threads, so a
/// slow render only ties up the worker that took it.  Returns once
/// every worker has seen the listener fail.
pub fn serve_on(
    server: Server,
    gallery: &Gallery,
    threads: usize,
    handlers: usize,
) -> Result<(), BrotError> {
    let handlers = handlers.max(1);
    debug!("answering requests on {} handlers", handlers);
    let server = &server;

    crossbeam::scope(|spawner| {
        for _ in 0..handlers {
            spawner.spawn(move |_| loop {
                match server.recv() {
                    Ok(request) => respond(request, gallery, threads),
                    Err(e) => {
                        error!("listener failed: {}", e);
                        break;
                    }
                }
            });
        }
    })
    .map_err(|_| BrotError::WorkerPanic)
}

/// Serves requests until the process is stopped.
pub fn serve(port: &str, gallery: Gallery, threads: usize) -> Result<(), BrotError> {
    serve_on(bind(port)?, &gallery, threads, handler_count())
}
