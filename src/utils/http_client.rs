use reqwest::{Client, header::{HeaderMap, HeaderValue, USER_AGENT, ACCEPT, REFERER}};

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
const JSON_ACCEPT: &str = "application/json, text/plain, */*";
const VDJ_REFERER: &str = "https://gold.vdj.me/zh";

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_ACCEPT));
    headers
}

/// 创建金价接口的 HTTP 客户端
/// 上游有爬虫过滤，默认模拟浏览器请求头；`with_headers = false` 时不附带
pub fn create_gold_client(with_headers: bool) -> Result<Client, reqwest::Error> {
    let builder = Client::builder();
    if with_headers {
        builder.default_headers(browser_headers()).build()
    } else {
        builder.build()
    }
}

/// 创建 vdj 宏观/报价接口的 HTTP 客户端，该上游要求 Referer
pub fn create_vdj_client() -> Result<Client, reqwest::Error> {
    let mut headers = browser_headers();
    headers.insert(REFERER, HeaderValue::from_static(VDJ_REFERER));

    Client::builder()
        .default_headers(headers)
        .build()
}
