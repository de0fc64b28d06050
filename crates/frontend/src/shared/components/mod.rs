pub mod notice_bar;
