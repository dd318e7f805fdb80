pub mod sachet_rss;
