use rmcp::{
    ErrorData as McpError,
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool,
    tool_handler,
    tool_router
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::time::calendar::calendarerror::CalendarError;
use crate::tool::adapter::ToolAdapter;
use crate::tool::outcome::{DetailOutcome, SentenceOutcome};

pub const DEFAULT_SERVER_NAME: &str = "中国节假日日历";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DateParams {
    /// 日期字符串，格式为 YYYY-MM-DD
    pub date: String
}

fn default_include_weekend() -> bool {
    true
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DateRangeParams {
    /// 开始日期，格式为 YYYY-MM-DD
    pub start: String,
    /// 结束日期，格式为 YYYY-MM-DD
    pub end: String,
    /// 是否包含周末，默认为 true
    #[serde(default = "default_include_weekend")]
    pub include_weekend: bool
}

/// What a tool call hands back before it becomes an MCP result.
#[derive(PartialEq, Eq, Debug)]
pub enum ToolReply {
    Text(String),
    /// The calendar could not answer; reported with `isError` set.
    Failure(String)
}

impl ToolReply {
    fn from_sentence(tool: &str, result: Result<SentenceOutcome, CalendarError>) -> ToolReply {
        match result {
            Ok(outcome) => ToolReply::Text(outcome.render()),
            Err(err) => Self::failure(tool, err)
        }
    }

    fn from_detail(tool: &str, result: Result<DetailOutcome, CalendarError>) -> ToolReply {
        match result {
            Ok(outcome) => ToolReply::Text(outcome.render()),
            Err(err) => Self::failure(tool, err)
        }
    }

    fn failure(tool: &str, err: CalendarError) -> ToolReply {
        warn!(tool, error = %err, "calendar query failed");
        ToolReply::Failure(err.to_string())
    }
}

impl From<ToolReply> for CallToolResult {
    fn from(reply: ToolReply) -> CallToolResult {
        match reply {
            ToolReply::Text(text) => CallToolResult::success(vec![Content::text(text)]),
            ToolReply::Failure(message) => CallToolResult::error(vec![Content::text(message)])
        }
    }
}

/// MCP server exposing the holiday calendar tools.
#[derive(Clone)]
pub struct HolidayServer {
    name: String,
    adapter: ToolAdapter,
    tool_router: ToolRouter<HolidayServer>
}

#[tool_router]
impl HolidayServer {
    pub fn new(name: impl Into<String>, adapter: ToolAdapter) -> HolidayServer {
        HolidayServer {
            name: name.into(),
            adapter,
            tool_router: Self::tool_router()
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    #[tool(description = "判断一个日期是否是节假日")]
    async fn check_is_holiday(
        &self,
        Parameters(DateParams { date }): Parameters<DateParams>
    ) -> Result<CallToolResult, McpError> {
        debug!(%date, "check_is_holiday");
        Ok(self.check_is_holiday_reply(&date).into())
    }

    #[tool(description = "判断一个日期是否是工作日")]
    async fn check_is_workday(
        &self,
        Parameters(DateParams { date }): Parameters<DateParams>
    ) -> Result<CallToolResult, McpError> {
        debug!(%date, "check_is_workday");
        Ok(self.check_is_workday_reply(&date).into())
    }

    #[tool(description = "获取指定日期的节假日详细信息：属于某个节假日时返回 {\"name\": 节日名, \"is_official_rest_day\": 是否为放假日}，否则返回 null")]
    async fn get_holiday_detail(
        &self,
        Parameters(DateParams { date }): Parameters<DateParams>
    ) -> Result<CallToolResult, McpError> {
        debug!(%date, "get_holiday_detail");
        Ok(self.get_holiday_detail_reply(&date).into())
    }

    #[tool(description = "获取指定日期范围内的所有节假日，包括法定节假日和周末（如果 include_weekend 为 true），多个日期之间以逗号和空格分隔")]
    async fn get_holidays(
        &self,
        Parameters(params): Parameters<DateRangeParams>
    ) -> Result<CallToolResult, McpError> {
        debug!(start = %params.start, end = %params.end, include_weekend = params.include_weekend, "get_holidays");
        Ok(self.get_holidays_reply(&params).into())
    }

    #[tool(description = "获取指定日期范围内的所有工作日，多个日期之间以逗号和空格分隔")]
    async fn get_workdays(
        &self,
        Parameters(params): Parameters<DateRangeParams>
    ) -> Result<CallToolResult, McpError> {
        debug!(start = %params.start, end = %params.end, include_weekend = params.include_weekend, "get_workdays");
        Ok(self.get_workdays_reply(&params).into())
    }
}

impl HolidayServer {
    pub fn check_is_holiday_reply(&self, date: &str) -> ToolReply {
        ToolReply::from_sentence("check_is_holiday", self.adapter.check_is_holiday(date))
    }

    pub fn check_is_workday_reply(&self, date: &str) -> ToolReply {
        ToolReply::from_sentence("check_is_workday", self.adapter.check_is_workday(date))
    }

    pub fn get_holiday_detail_reply(&self, date: &str) -> ToolReply {
        ToolReply::from_detail("get_holiday_detail", self.adapter.get_holiday_detail(date))
    }

    pub fn get_holidays_reply(&self, params: &DateRangeParams) -> ToolReply {
        ToolReply::from_sentence(
            "get_holidays",
            self.adapter.get_holidays(&params.start, &params.end, params.include_weekend)
        )
    }

    pub fn get_workdays_reply(&self, params: &DateRangeParams) -> ToolReply {
        ToolReply::from_sentence(
            "get_workdays",
            self.adapter.get_workdays(&params.start, &params.end, params.include_weekend)
        )
    }
}

#[tool_handler]
impl ServerHandler for HolidayServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = self.name.clone();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_owned();
        info.instructions = Some("查询中国法定节假日、调休工作日以及日期范围内的节假日和工作日".to_owned());
        info
    }
}
