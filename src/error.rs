use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入校验失败（客户端错误）
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// 随机数服务错误（只在随机位置服务内部出现）
    #[error("随机数服务错误: {0}")]
    Random(#[from] RandomSourceError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 其他内部错误，不对调用方暴露细节
    #[error("内部错误: {0}")]
    Internal(String),
}

/// 输入校验错误
///
/// `Display` 即为返回给调用方的文本
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 包含 a-z 以外的字符（去重，按首次出现顺序）
    #[error("Были введены не подходящие символы: {characters}")]
    InvalidCharacters { characters: String },
    /// 命中黑名单
    #[error("Введённая строка находится в чёрном списке: {input}")]
    Blacklisted { input: String },
    /// 超出长度上限
    #[error("Строка слишком длинная: {length} символов, максимум {max}")]
    TooLong { length: usize, max: usize },
    /// 查询参数无法解析（未知算法、类型不符等）
    #[error("Некорректные параметры запроса: {reason}")]
    InvalidQuery { reason: String },
}

/// 随机数服务错误
#[derive(Debug, Error)]
pub enum RandomSourceError {
    /// 网络请求失败（含超时）
    #[error("请求失败 ({url}): {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// 返回非成功状态码
    #[error("返回错误状态码 ({url}): {status}")]
    BadStatus { url: String, status: u16 },
    /// 响应体不是整数
    #[error("无法解析响应体: {body:?}")]
    InvalidBody { body: String },
    /// 返回值超出请求的范围
    #[error("返回值 {value} 超出范围 [0, {max}]")]
    OutOfRange { value: i64, max: usize },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置项取值非法
    #[error("配置项 {field} 非法: {reason}")]
    InvalidValue { field: String, reason: String },
    /// 配置文件读取或解析失败
    #[error("配置文件加载失败 ({path}): {source}")]
    FileLoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal(message.into())
    }

    /// 创建配置文件加载错误
    pub fn config_file_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Config(ConfigError::FileLoadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 是否属于客户端错误（需要返回 400）
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
