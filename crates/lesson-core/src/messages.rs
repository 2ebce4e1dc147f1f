//! Localized user-facing strings for error codes and recovery actions.

use crate::enums::Locale;
use crate::errors::{ErrorCode, RecoveryKind};

/// Pre-written, non-technical message for `code` in `locale`.
#[must_use]
pub const fn user_message(code: ErrorCode, locale: Locale) -> &'static str {
    match locale {
        Locale::En => user_message_en(code),
        Locale::ZhTw => user_message_zh_tw(code),
    }
}

const fn user_message_en(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::AiParseError => {
            "The AI returned content in an unexpected format. Please try generating again."
        }
        ErrorCode::AiValidationError => {
            "The AI response was incomplete or malformed. Please try generating again."
        }
        ErrorCode::AiProviderError => "The AI service reported an error. Please try again later.",
        ErrorCode::AiRateLimited => "The AI service is busy right now. Please wait a moment and retry.",
        ErrorCode::AiEmptyResponse => "The AI returned an empty response. Please try again.",
        ErrorCode::AiTimeout => "The AI took too long to respond. Please try again.",
        ErrorCode::StorageReadFailed => "Saved content could not be loaded.",
        ErrorCode::StorageWriteFailed => "Your content could not be saved.",
        ErrorCode::StorageNotFound => "The requested lesson plan no longer exists.",
        ErrorCode::NetworkRequestFailed => {
            "A network error occurred. Please check your connection and retry."
        }
        ErrorCode::NetworkTimeout => "The network request timed out. Please retry.",
        ErrorCode::AuthMissingApiKey => "No API key is configured. Please add one in settings.",
        ErrorCode::AuthInvalidApiKey => "The configured API key was rejected. Please check settings.",
        ErrorCode::ShareLinkInvalid => "This share link is not valid.",
        ErrorCode::ShareLinkExpired => "This share link has expired.",
        ErrorCode::ValidationInvalidInput => "Some of the information you entered is not valid.",
        ErrorCode::Unknown => "Something went wrong. Please try again.",
    }
}

const fn user_message_zh_tw(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::AiParseError => "AI 回傳的內容格式不正確，請重新生成。",
        ErrorCode::AiValidationError => "AI 回傳的內容不完整或格式有誤，請重新生成。",
        ErrorCode::AiProviderError => "AI 服務發生錯誤，請稍後再試。",
        ErrorCode::AiRateLimited => "AI 服務目前忙碌中，請稍候再試。",
        ErrorCode::AiEmptyResponse => "AI 沒有回傳任何內容，請再試一次。",
        ErrorCode::AiTimeout => "AI 回應逾時，請再試一次。",
        ErrorCode::StorageReadFailed => "無法載入已儲存的內容。",
        ErrorCode::StorageWriteFailed => "無法儲存您的內容。",
        ErrorCode::StorageNotFound => "找不到指定的教案。",
        ErrorCode::NetworkRequestFailed => "網路連線發生錯誤，請檢查連線後重試。",
        ErrorCode::NetworkTimeout => "網路請求逾時，請重試。",
        ErrorCode::AuthMissingApiKey => "尚未設定 API 金鑰，請至設定頁面新增。",
        ErrorCode::AuthInvalidApiKey => "API 金鑰無效，請檢查設定。",
        ErrorCode::ShareLinkInvalid => "此分享連結無效。",
        ErrorCode::ShareLinkExpired => "此分享連結已過期。",
        ErrorCode::ValidationInvalidInput => "輸入的資料有誤。",
        ErrorCode::Unknown => "發生未知錯誤，請再試一次。",
    }
}

/// Button label for a recovery action.
#[must_use]
pub const fn action_label(kind: RecoveryKind, locale: Locale) -> &'static str {
    match (locale, kind) {
        (Locale::En, RecoveryKind::Retry) => "Retry",
        (Locale::En, RecoveryKind::SwitchProvider) => "Switch provider",
        (Locale::En, RecoveryKind::Reconfigure) => "Open settings",
        (Locale::En, RecoveryKind::Dismiss) => "Dismiss",
        (Locale::En, RecoveryKind::ContactSupport) => "Report problem",
        (Locale::ZhTw, RecoveryKind::Retry) => "重試",
        (Locale::ZhTw, RecoveryKind::SwitchProvider) => "切換 AI 服務",
        (Locale::ZhTw, RecoveryKind::Reconfigure) => "開啟設定",
        (Locale::ZhTw, RecoveryKind::Dismiss) => "關閉",
        (Locale::ZhTw, RecoveryKind::ContactSupport) => "回報問題",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODES: [ErrorCode; 17] = [
        ErrorCode::AiParseError,
        ErrorCode::AiValidationError,
        ErrorCode::AiProviderError,
        ErrorCode::AiRateLimited,
        ErrorCode::AiEmptyResponse,
        ErrorCode::AiTimeout,
        ErrorCode::StorageReadFailed,
        ErrorCode::StorageWriteFailed,
        ErrorCode::StorageNotFound,
        ErrorCode::NetworkRequestFailed,
        ErrorCode::NetworkTimeout,
        ErrorCode::AuthMissingApiKey,
        ErrorCode::AuthInvalidApiKey,
        ErrorCode::ShareLinkInvalid,
        ErrorCode::ShareLinkExpired,
        ErrorCode::ValidationInvalidInput,
        ErrorCode::Unknown,
    ];

    #[test]
    fn every_code_has_messages_in_every_locale() {
        for code in CODES {
            for locale in [Locale::En, Locale::ZhTw] {
                assert!(!user_message(code, locale).is_empty(), "{code} / {locale}");
            }
        }
    }

    #[test]
    fn user_messages_do_not_leak_codes() {
        for code in CODES {
            assert!(!user_message(code, Locale::En).contains(code.as_str()));
        }
    }
}
