use crate::dialect::Dialect;

/// Буфер, в который пишут выражения, клаузы и сам рендерер.
pub struct SqlWriter<'d> {
    pub buf: String,
    pub dialect: &'d Dialect,
}

impl<'d> SqlWriter<'d> {
    pub fn new(cap: usize, dialect: &'d Dialect) -> Self {
        Self {
            buf: String::with_capacity(cap),
            dialect,
        }
    }

    #[inline]
    pub fn push<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(s.as_ref());
    }

    #[inline]
    pub fn push_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// Пишет текст токена из диалекта; отсутствующий токен даёт пустую строку
    pub fn push_token(&mut self, name: &str) {
        if !self.dialect.contains(name) {
            tracing::debug!(
                token = name,
                dialect = %self.dialect,
                "token is not defined by dialect, rendering empty text"
            );
            return;
        }
        self.buf.push_str(self.dialect.token(name));
    }

    #[inline]
    pub fn push_u64(&mut self, v: u64) {
        use itoa::Buffer;
        let mut buf = Buffer::new();
        self.buf.push_str(buf.format(v));
    }

    #[inline]
    pub fn push_sep(&mut self, i: usize, sep: &str) {
        if i > 0 {
            self.buf.push_str(sep);
        }
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
