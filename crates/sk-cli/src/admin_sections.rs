use sk_core::Locale;

/// (vi title, en title, vi description, en description)
const SECTIONS: &[(&str, &str, &str, &str)] = &[
    ("Quản Lý Menu", "Manage Menu", "Thêm, sửa, xóa sản phẩm", "Add, edit, delete products"),
    ("Đặt Bàn", "Reservations", "Xem và quản lý đặt bàn", "View and manage bookings"),
    ("Đơn Hàng", "Orders", "Theo dõi đơn hàng", "Track customer orders"),
    ("Tin Tức", "Blog Posts", "Quản lý bài viết blog", "Manage blog articles"),
    ("Thống Kê", "Analytics", "Xem báo cáo chi tiết", "View detailed reports"),
    ("Cài Đặt", "Settings", "Cấu hình hệ thống", "System configuration"),
];

/// Dashboard quick actions as (title, description) in `locale`.
pub(crate) fn sections(locale: Locale) -> Vec<(&'static str, &'static str)> {
    SECTIONS
        .iter()
        .map(|(vi_title, en_title, vi_desc, en_desc)| match locale {
            Locale::Vi => (*vi_title, *vi_desc),
            Locale::En => (*en_title, *en_desc),
        })
        .collect()
}
