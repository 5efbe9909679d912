use serde::{Deserialize, Serialize};

use crate::repositories::{Page, PageRequest};

// Parámetros de paginación (?page=&size=)
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        PageRequest::new(params.page, params.size)
    }
}

// Página devuelta por todos los listados
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        Self {
            first: page.page == 0,
            last: u64::from(page.page) + 1 >= total_pages,
            number: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages,
            content: page.items,
        }
    }
}

// Query de cambio de estado (?status=)
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: String,
}
