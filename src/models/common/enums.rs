//! 跨实体共享的业务枚举
//!
//! 数据库中按字符串存储，反序列化失败时带上支持值提示。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 性别
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const MALE: &'static str = "MALE";
    pub const FEMALE: &'static str = "FEMALE";
}

impl<'de> Deserialize<'de> for Sex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Sex::MALE => Ok(Sex::Male),
            Sex::FEMALE => Ok(Sex::Female),
            _ => Err(serde::de::Error::custom(format!(
                "无效的性别: '{s}'. 支持的值: MALE, FEMALE"
            ))),
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "{}", Sex::MALE),
            Sex::Female => write!(f, "{}", Sex::FEMALE),
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MALE" => Ok(Sex::Male),
            "FEMALE" => Ok(Sex::Female),
            _ => Err(format!("Invalid sex: {s}")),
        }
    }
}

// 上课日（周一到周五）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub enum WeekDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl WeekDay {
    pub const ALL: [WeekDay; 5] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
    ];
}

impl<'de> Deserialize<'de> for WeekDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的上课日: '{s}'. 支持的值: MONDAY..FRIDAY"
            ))
        })
    }
}

impl std::fmt::Display for WeekDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WeekDay::Monday => "MONDAY",
            WeekDay::Tuesday => "TUESDAY",
            WeekDay::Wednesday => "WEDNESDAY",
            WeekDay::Thursday => "THURSDAY",
            WeekDay::Friday => "FRIDAY",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for WeekDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MONDAY" => Ok(WeekDay::Monday),
            "TUESDAY" => Ok(WeekDay::Tuesday),
            "WEDNESDAY" => Ok(WeekDay::Wednesday),
            "THURSDAY" => Ok(WeekDay::Thursday),
            "FRIDAY" => Ok(WeekDay::Friday),
            _ => Err(format!("Invalid week day: {s}")),
        }
    }
}
