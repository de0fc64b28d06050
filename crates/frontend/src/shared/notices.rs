/// Уровень уведомления
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice--info",
            NoticeLevel::Error => "notice notice--error",
        }
    }
}

/// One dismissable message shown above the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

/// Очередь уведомлений страницы
///
/// Every failure in the page ends up here instead of only in the console.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn push(&mut self, level: NoticeLevel, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice {
            id,
            level,
            text: text.into(),
        });
        id
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        let text = text.into();
        log::error!("{}", text);
        self.push(NoticeLevel::Error, text)
    }

    pub fn info(&mut self, text: impl Into<String>) -> u64 {
        let text = text.into();
        log::info!("{}", text);
        self.push(NoticeLevel::Info, text)
    }

    /// Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut board = NoticeBoard::default();
        let first = board.error("Failed to fetch");
        let second = board.info("No product found for barcode: 123");
        assert_ne!(first, second);
        assert_eq!(board.notices().len(), 2);

        board.dismiss(first);
        assert_eq!(board.notices().len(), 1);
        assert_eq!(board.last().unwrap().level, NoticeLevel::Info);

        board.dismiss(999);
        assert_eq!(board.notices().len(), 1);
    }
}
