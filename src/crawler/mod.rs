/// 伊朗外匯、金價報價網 tgju.org
pub mod tgju;
