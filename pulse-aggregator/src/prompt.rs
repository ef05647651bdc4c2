use crate::types::{AggregatorError, Article, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptLanguage {
    #[default]
    English,
    Turkish,
}

impl FromStr for PromptLanguage {
    type Err = AggregatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(PromptLanguage::English),
            "tr" | "turkish" => Ok(PromptLanguage::Turkish),
            other => Err(AggregatorError::General(format!(
                "Unsupported prompt language: {}",
                other
            ))),
        }
    }
}

/// Prompt asking an assistant for a structured deep-dive on one article.
pub fn analysis_prompt(article: &Article, language: PromptLanguage) -> String {
    match language {
        PromptLanguage::English => format!(
            "Act as a Senior AI Researcher. Analyze the following article/paper deeply.

Structure your response exactly as follows:

### 📋 Executive Summary
(Provide a clear, high-level summary of the entire article in 2-3 sentences.)

### 🎯 Core Problem
(What specific gap, inefficiency, or limitation is this research addressing?)

### 💡 Key Innovation
(Technical details of the methodology, architecture, or approach. Be precise.)

### 🚀 Practical Implications
(Why does this matter? What are the real-world use cases or impact?)

---
Title: {}
Source: {}
Abstract/Summary: {}
Link: {}
",
            article.title, article.source, article.summary, article.url
        ),
        PromptLanguage::Turkish => format!(
            "Kıdemli bir Yapay Zeka Araştırmacısı olarak hareket et. \
Aşağıdaki makaleyi/yazıyı derinlemesine analiz et.

Yanıtını kesinlikle aşağıdaki formatta ve TÜRKÇE olarak ver:

### 📋 Yönetici Özeti
(Tüm makalenin 2-3 cümlelik net, üst düzey özeti.)

### 🎯 Temel Sorun
(Bu araştırma hangi spesifik boşluğu, verimsizliği veya kısıtlamayı ele alıyor?)

### 💡 Temel Yenilik
(Metodolojinin, mimarinin veya yaklaşımın teknik detayları. Kesin ve net ol.)

### 🚀 Pratik Çıkarımlar
(Bu neden önemli? Gerçek dünyadaki kullanım durumları veya etkisi nedir?)

---
Başlık: {}
Kaynak: {}
Özet: {}
Bağlantı: {}
",
            article.title, article.source, article.summary, article.url
        ),
    }
}
